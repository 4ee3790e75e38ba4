//! Chat Widget Core Library
//!
//! Configuration, transcript state, and canned-response resolution for
//! the embeddable chat widget. This crate is UI-framework free; the
//! Dioxus components in `chatwidget-ui` drive it.
//!
//! ## Overview
//!
//! The widget is a scripted exchange: the host configures a set of
//! trigger phrases and canned replies, the user sends a message, and
//! after a short typing delay the widget appends the matching reply
//! (or a fixed fallback). There is no networking and no persistence;
//! the [`Transcript`] is the only state.
//!
//! ## Quick Start
//!
//! ```
//! # fn main() -> Result<(), chatwidget_core::WidgetError> {
//! use chatwidget_core::{ResponseTable, Sender, Transcript, WidgetConfig};
//!
//! let config = WidgetConfig::from_json(r#"{
//!     "initialMessage": "Hi!",
//!     "botResponses": { "hello": "Hey there!" },
//!     "suggestedMessages": ["hello"]
//! }"#)?;
//!
//! let mut transcript = Transcript::new();
//! transcript.greet(&config);
//!
//! let responses = ResponseTable::from_config(&config);
//! transcript.push(Sender::User, "Hello");
//! transcript.push(Sender::Bot, responses.resolve("Hello"));
//!
//! assert_eq!(transcript.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod message;
pub mod responder;
pub mod transcript;

// Re-exports
pub use config::WidgetConfig;
pub use error::WidgetError;
pub use message::{ChatMessage, Sender};
pub use responder::{ResponseTable, DEFAULT_FALLBACK, TYPING_DELAY};
pub use transcript::Transcript;
