//! Messages List Component
//!
//! Scrollable region holding every message since the last clear or
//! restart, in append order.

use dioxus::prelude::*;

use chatwidget_core::ChatMessage;

use super::MessageBubble;

/// Scrollable message list.
///
/// The widget shell keeps this pinned to the newest entry after every
/// append.
#[component]
pub fn MessagesList(messages: Vec<ChatMessage>) -> Element {
    rsx! {
        div { id: "chatbot-messages",
            for msg in messages.iter() {
                MessageBubble { key: "{msg.id}", message: msg.clone() }
            }

            // Scroll anchor at bottom
            div { class: "scroll-anchor" }
        }
    }
}
