//! Floating Launcher Component
//!
//! The always-present toggle button that reveals the chat panel. The
//! widget shell drives its `display` so the launcher and panel are
//! never shown together.

use dioxus::prelude::*;

/// Floating chat launcher button.
#[component]
pub fn LauncherButton(
    /// Inline style (display + theme custom properties), composed by
    /// the widget shell.
    style: String,
    /// Click handler opening the panel.
    onclick: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            id: "chatbot-toggle",
            style: "{style}",
            title: "Open chat",
            onclick: move |_| onclick.call(()),
            "💬"
        }
    }
}
