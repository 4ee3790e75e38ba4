//! Message Bubble Component
//!
//! One chat bubble per transcript entry, aligned right for the user
//! and left for the bot.

use dioxus::prelude::*;

use chatwidget_core::ChatMessage;

/// Individual message bubble.
#[component]
pub fn MessageBubble(message: ChatMessage) -> Element {
    rsx! {
        div { class: "{message.sender.css_class()}",
            div { class: "text", "{message.text}" }
        }
    }
}
