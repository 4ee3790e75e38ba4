//! Message Input Component
//!
//! Text input plus send button. Enter sends, same as clicking the
//! button. Empty or whitespace-only drafts are dropped without
//! feedback, and the draft is only cleared on an actual send.

use dioxus::prelude::*;

/// Input row at the bottom of the panel.
#[component]
pub fn MessageInput(
    /// Handler receiving the raw draft on send.
    on_send: EventHandler<String>,
    /// Placeholder text.
    #[props(default = "Type your message...".to_string())]
    placeholder: String,
) -> Element {
    let mut draft = use_signal(String::new);

    let mut submit = move || {
        let raw = draft();
        if raw.trim().is_empty() {
            return;
        }
        on_send.call(raw);
        draft.set(String::new());
    };

    rsx! {
        div { id: "chatbot-input",
            input {
                id: "user-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{draft}",
                oninput: move |e| draft.set(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        submit();
                    }
                },
            }

            button {
                id: "send-btn",
                onclick: move |_| submit(),
                "Send"
            }
        }
    }
}
