//! Canned-response resolution
//!
//! A single case-insensitive dictionary match with a static fallback.
//! Trigger phrases are configured lowercase; user input is trimmed and
//! case-folded before the lookup. No partial matching, no scoring.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::WidgetConfig;

/// Reply used when no trigger phrase matches.
pub const DEFAULT_FALLBACK: &str = "Sorry, I didn't understand that.";

/// Fixed delay before a bot reply is appended, simulating typing.
pub const TYPING_DELAY: Duration = Duration::from_millis(500);

/// Lookup table from lowercase trigger phrase to canned reply.
#[derive(Debug, Clone, Default)]
pub struct ResponseTable {
    replies: HashMap<String, String>,
}

impl ResponseTable {
    /// Build a table from an explicit trigger map.
    pub fn new(replies: HashMap<String, String>) -> Self {
        Self { replies }
    }

    /// Build a table from a widget configuration.
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.bot_responses.clone())
    }

    /// Resolve the reply for raw user input.
    ///
    /// The input is trimmed and case-folded to lowercase, then matched
    /// exactly against the trigger map. Unmatched input yields
    /// [`DEFAULT_FALLBACK`].
    pub fn resolve(&self, input: &str) -> &str {
        let key = input.trim().to_lowercase();
        self.replies
            .get(&key)
            .map(String::as_str)
            .unwrap_or(DEFAULT_FALLBACK)
    }
}
