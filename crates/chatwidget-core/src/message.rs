//! Chat message types
//!
//! A transcript entry is either a user message or a bot reply. Messages
//! are never edited or removed individually; the transcript only ever
//! appends or clears wholesale.

use chrono::Utc;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS class list for a message row from this sender.
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "message user",
            Sender::Bot => "message bot",
        }
    }
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Transcript-unique id, used as the render key.
    pub id: u64,
    /// Message author.
    pub sender: Sender,
    /// Message text, displayed verbatim.
    pub text: String,
    /// Unix timestamp in milliseconds when the message was appended.
    pub timestamp_ms: i64,
}

impl ChatMessage {
    pub(crate) fn new(id: u64, sender: Sender, text: String) -> Self {
        Self {
            id,
            sender,
            text,
            timestamp_ms: Utc::now().timestamp_millis(),
        }
    }
}
