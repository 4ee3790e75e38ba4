//! Widget configuration
//!
//! Everything the host passes at construction time, with explicit
//! defaults. Field names on the wire are camelCase, matching the
//! host-facing option names.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Immutable widget configuration.
///
/// Every field has a default, so `{}` is a valid configuration.
/// Unknown keys are ignored rather than rejected; a misspelled option
/// simply leaves the default in place.
///
/// # Example
///
/// ```
/// use chatwidget_core::WidgetConfig;
///
/// let config = WidgetConfig::from_json(r##"{
///     "title": "Support",
///     "botResponses": { "hours": "We are open 9-5." },
///     "suggestedMessages": ["hours"],
///     "themeColor": "#336699"
/// }"##).unwrap();
///
/// assert_eq!(config.title, "Support");
/// assert_eq!(config.title_color, "white");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Header title text.
    pub title: String,
    /// Greeting shown on first open and after a restart. `None` means
    /// no greeting is displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_message: Option<String>,
    /// Lowercase trigger phrase -> canned reply.
    pub bot_responses: HashMap<String, String>,
    /// Quick-reply phrases rendered as suggestion chips, in order.
    pub suggested_messages: Vec<String>,
    /// Color applied to the header, send button, and launcher. `None`
    /// keeps the stylesheet defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    /// Title text color; only takes effect when `theme_color` is set.
    pub title_color: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Chatbot".to_string(),
            initial_message: None,
            bot_responses: HashMap::new(),
            suggested_messages: Vec::new(),
            theme_color: None,
            title_color: "white".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        serde_json::from_str(json).map_err(|e| WidgetError::Config(e.to_string()))
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WidgetError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
