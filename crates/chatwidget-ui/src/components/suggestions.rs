//! Suggestion Row Component
//!
//! Horizontal row of quick-reply chips, one per configured phrase.
//! Clicking a chip sends its phrase exactly as if the user had typed
//! it.

use dioxus::document;
use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;

/// Horizontally scrollable row of suggestion chips.
#[component]
pub fn SuggestionRow(
    /// Phrases to offer, in configured order.
    suggestions: Vec<String>,
    /// Handler receiving the clicked phrase.
    on_pick: EventHandler<String>,
) -> Element {
    // Translate horizontal wheel deltas into a smooth scroll of the
    // row; vertical deltas fall through to the page.
    let on_wheel = move |e: WheelEvent| {
        let dx = match e.delta() {
            WheelDelta::Pixels(v) => v.x,
            _ => 0.0,
        };
        if dx != 0.0 {
            e.prevent_default();
            document::eval(&format!(
                "const el = document.getElementById('suggested-messages'); \
                 if (el) {{ el.scrollBy({{ left: {}, behavior: 'smooth' }}); }}",
                dx
            ));
        }
    };

    rsx! {
        div {
            id: "suggested-messages",
            class: "suggested-messages-container",
            onwheel: on_wheel,

            for phrase in suggestions.iter() {
                {
                    let phrase_clone = phrase.clone();
                    rsx! {
                        button {
                            class: "suggestion-btn",
                            onclick: move |_| on_pick.call(phrase_clone.clone()),
                            "{phrase}"
                        }
                    }
                }
            }
        }
    }
}
