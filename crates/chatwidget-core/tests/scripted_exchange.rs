//! Scripted exchange over the core pipeline
//!
//! Drives greet -> send -> resolve -> append -> clear/restart the way
//! the UI layer does, without the UI. The send pipeline trims input,
//! drops empty sends, appends the user message, and appends the
//! resolved reply once the typing delay has elapsed.

use std::time::Duration;

use chatwidget_core::{
    ResponseTable, Sender, Transcript, WidgetConfig, DEFAULT_FALLBACK, TYPING_DELAY,
};

fn demo_config() -> WidgetConfig {
    WidgetConfig::from_json(
        r#"{
            "initialMessage": "Hi!",
            "botResponses": { "hello": "Hey there!" },
            "suggestedMessages": ["hello"]
        }"#,
    )
    .expect("valid demo config")
}

/// The send pipeline as the widget runs it, minus the delay: trim,
/// drop empty input, append the user message, append the resolved
/// reply.
fn send(transcript: &mut Transcript, responses: &ResponseTable, raw: &str) {
    let text = raw.trim();
    if text.is_empty() {
        return;
    }
    transcript.push(Sender::User, text);
    transcript.push(Sender::Bot, responses.resolve(text));
}

fn entries(t: &Transcript) -> Vec<(Sender, String)> {
    t.messages()
        .iter()
        .map(|m| (m.sender, m.text.clone()))
        .collect()
}

#[test]
fn full_exchange_then_clear() {
    let config = demo_config();
    let responses = ResponseTable::from_config(&config);

    let mut transcript = Transcript::new();
    transcript.greet(&config);
    assert_eq!(entries(&transcript), vec![(Sender::Bot, "Hi!".to_string())]);

    // Mixed-case input still hits the "hello" trigger.
    send(&mut transcript, &responses, "Hello");
    assert_eq!(
        entries(&transcript),
        vec![
            (Sender::Bot, "Hi!".to_string()),
            (Sender::User, "Hello".to_string()),
            (Sender::Bot, "Hey there!".to_string()),
        ]
    );

    transcript.clear();
    assert!(transcript.is_empty());
}

#[test]
fn whitespace_send_leaves_transcript_unchanged() {
    let config = demo_config();
    let responses = ResponseTable::from_config(&config);

    let mut transcript = Transcript::new();
    transcript.greet(&config);
    let before = entries(&transcript);

    send(&mut transcript, &responses, "");
    send(&mut transcript, &responses, "   ");
    send(&mut transcript, &responses, "\t\n");

    assert_eq!(entries(&transcript), before);
}

#[test]
fn suggestion_click_equals_typing_the_phrase() {
    let config = demo_config();
    let responses = ResponseTable::from_config(&config);

    // Suggestion chips reuse the send path with the configured phrase.
    let phrase = config.suggested_messages[0].as_str();

    let mut via_chip = Transcript::new();
    via_chip.greet(&config);
    send(&mut via_chip, &responses, phrase);

    let mut via_typing = Transcript::new();
    via_typing.greet(&config);
    send(&mut via_typing, &responses, "hello");

    assert_eq!(entries(&via_chip), entries(&via_typing));
}

#[test]
fn unmatched_input_gets_the_fallback() {
    let config = demo_config();
    let responses = ResponseTable::from_config(&config);

    let mut transcript = Transcript::new();
    send(&mut transcript, &responses, "open a ticket");

    assert_eq!(
        entries(&transcript),
        vec![
            (Sender::User, "open a ticket".to_string()),
            (Sender::Bot, DEFAULT_FALLBACK.to_string()),
        ]
    );
}

#[test]
fn restart_restores_the_first_open_view() {
    let config = demo_config();
    let responses = ResponseTable::from_config(&config);

    let mut transcript = Transcript::new();
    transcript.greet(&config);
    send(&mut transcript, &responses, "hello");
    send(&mut transcript, &responses, "something else");

    transcript.restart(&config);
    assert_eq!(entries(&transcript), vec![(Sender::Bot, "Hi!".to_string())]);
}

#[test]
fn typing_delay_is_half_a_second() {
    assert_eq!(TYPING_DELAY, Duration::from_millis(500));
}
