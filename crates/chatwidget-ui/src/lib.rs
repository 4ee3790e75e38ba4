//! Chat Widget UI Components
//!
//! Dioxus components for the embeddable chat widget: a floating
//! launcher button plus a toggleable panel with header controls, a
//! message list, suggestion chips, and an input row.
//!
//! ## Embedding
//!
//! Hosts include the stylesheet once, then mount [`ChatWidget`] with a
//! [`WidgetConfig`](chatwidget_core::WidgetConfig):
//!
//! ```rust,ignore
//! use chatwidget_core::WidgetConfig;
//! use chatwidget_ui::{theme::WIDGET_STYLES, ChatWidget};
//!
//! rsx! {
//!     style { {WIDGET_STYLES} }
//!     ChatWidget { config: WidgetConfig::default() }
//! }
//! ```
//!
//! Element ids under the widget (`#chatbot`, `#chatbot-toggle`, ...)
//! are fixed strings the host stylesheet may target, so one page hosts
//! at most one widget instance.

pub mod components;
pub mod state;
pub mod theme;

pub use components::*;
pub use state::PanelState;
