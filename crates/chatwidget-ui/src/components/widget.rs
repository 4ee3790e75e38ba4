//! Chat Widget Shell
//!
//! Wires the launcher, panel regions, and transcript state together,
//! and owns the send pipeline including the delayed bot reply.

use dioxus::document;
use dioxus::prelude::*;

use chatwidget_core::{ResponseTable, Sender, Transcript, WidgetConfig, TYPING_DELAY};

use crate::state::PanelState;

use super::{LauncherButton, MessageInput, MessagesList, SuggestionRow, WidgetHeader};

/// Pin the message list to its latest entry.
fn scroll_messages_to_bottom() {
    document::eval(
        "const el = document.getElementById('chatbot-messages'); \
         if (el) { el.scrollTop = el.scrollHeight; }",
    );
}

/// Inline style carrying the configured theme as CSS custom properties.
///
/// Empty when no theme color is configured, leaving the stylesheet
/// defaults in place. The title color only applies together with a
/// theme color.
fn theme_style(config: &WidgetConfig) -> String {
    match config.theme_color {
        Some(ref color) => format!(
            "--chat-theme: {}; --chat-title-color: {};",
            color, config.title_color
        ),
        None => String::new(),
    }
}

/// The embeddable chat widget.
///
/// Renders the floating launcher and the chat panel; exactly one of
/// the two is displayed at any time. Closing the panel hides it
/// without dropping state, so the transcript and any pending replies
/// survive a close/reopen.
///
/// All state is owned per instance, but element ids are fixed strings,
/// so a page hosts at most one widget.
#[component]
pub fn ChatWidget(config: WidgetConfig) -> Element {
    let mut panel = use_signal(PanelState::default);

    // The greeting is part of construction, same as the restart path.
    let mut transcript = use_signal({
        let config = config.clone();
        move || {
            let mut t = Transcript::new();
            t.greet(&config);
            t
        }
    });

    let responses = use_signal({
        let config = config.clone();
        move || ResponseTable::from_config(&config)
    });

    // Keep the list scrolled to the newest message on every append.
    use_effect(move || {
        let _ = transcript.read().len();
        scroll_messages_to_bottom();
    });

    // Send pipeline: trim, drop empty input, append the user message,
    // then append the resolved reply after the typing delay. Each send
    // spawns its own one-shot task; rapid sends overlap without
    // cancellation.
    let mut send = move |raw: String| {
        let text = raw.trim().to_string();
        if text.is_empty() {
            return;
        }
        tracing::debug!("sending user message: {}", text);
        transcript.write().push(Sender::User, text.clone());

        spawn(async move {
            tokio::time::sleep(TYPING_DELAY).await;
            let reply = responses.read().resolve(&text).to_string();
            tracing::debug!("bot reply resolved: {}", reply);
            transcript.write().push(Sender::Bot, reply);
        });
    };

    let restart_config = config.clone();
    let theme = theme_style(&config);
    let state = panel();
    let panel_style = format!("display: {}; {}", state.panel_display(), theme);
    let launcher_style = format!("display: {}; {}", state.launcher_display(), theme);
    let messages = transcript.read().messages().to_vec();

    rsx! {
        div {
            id: "chatbot",
            style: "{panel_style}",

            WidgetHeader {
                title: config.title.clone(),
                on_restart: move |_| {
                    tracing::debug!("restarting conversation");
                    transcript.write().restart(&restart_config);
                },
                on_clear: move |_| transcript.write().clear(),
                on_close: move |_| panel.set(PanelState::Closed),
            }

            MessagesList { messages }

            SuggestionRow {
                suggestions: config.suggested_messages.clone(),
                on_pick: move |phrase: String| send(phrase),
            }

            MessageInput { on_send: move |text: String| send(text) }
        }

        LauncherButton {
            style: launcher_style,
            onclick: move |_| panel.set(PanelState::Open),
        }
    }
}
