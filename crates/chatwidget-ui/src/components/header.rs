//! Widget Header Component
//!
//! Title bar with the restart, clear, and close controls.

use dioxus::prelude::*;

/// Panel header: title on the left, conversation controls on the right.
#[component]
pub fn WidgetHeader(
    /// Title text.
    title: String,
    /// Handler for the restart control (clear + re-greet).
    on_restart: EventHandler<()>,
    /// Handler for the clear control (empty the list only).
    on_clear: EventHandler<()>,
    /// Handler for the close control (hide the panel).
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div { id: "chatbot-header",
            span { id: "chatbot-title", "{title}" }

            div { class: "header-actions",
                button {
                    id: "restart-btn",
                    title: "Restart conversation",
                    onclick: move |_| on_restart.call(()),
                    "🔄"
                }
                button {
                    id: "clear-btn",
                    title: "Clear messages",
                    onclick: move |_| on_clear.call(()),
                    "🗑"
                }
                button {
                    id: "close-btn",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "✖"
                }
            }
        }
    }
}
