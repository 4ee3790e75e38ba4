//! Transcript state
//!
//! The ordered message list backing the widget. State lives here rather
//! than in the rendered tree; the UI renders whatever the transcript
//! holds.

use crate::config::WidgetConfig;
use crate::message::{ChatMessage, Sender};

/// Every message appended since the last clear or restart, in order.
///
/// Invariant: messages are only appended or cleared wholesale; nothing
/// is edited or removed individually.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, sender, text.into()));
    }

    /// Run the initial-message display routine: append the configured
    /// greeting, if any. First open and [`restart`](Self::restart)
    /// share this path.
    pub fn greet(&mut self, config: &WidgetConfig) {
        if let Some(ref greeting) = config.initial_message {
            self.push(Sender::Bot, greeting.clone());
        }
    }

    /// Empty the list. Ids keep counting up so render keys stay unique
    /// across a clear.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Clear, then re-run the first-open display routine.
    pub fn restart(&mut self, config: &WidgetConfig) {
        self.clear();
        self.greet(config);
    }

    /// Messages in append order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
