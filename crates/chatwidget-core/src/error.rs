//! Error types for the chat widget

use thiserror::Error;

/// Errors surfaced while loading a widget configuration.
///
/// Widget runtime operations never fail: an empty send is a no-op and
/// an unmatched trigger phrase falls back to a canned reply. Only
/// reading configuration from JSON or disk can go wrong.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Reading a configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration JSON could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}
