//! Color constants for the widget's default look.
//!
//! These mirror the custom properties in the stylesheet; the configured
//! theme color overrides the accent at runtime.

#![allow(dead_code)]

// === ACCENT (header, send button, launcher) ===
pub const ACCENT: &str = "#4a90d9";
pub const ACCENT_SOFT: &str = "rgba(74, 144, 217, 0.15)";

// === SURFACES ===
pub const PANEL_BG: &str = "#ffffff";
pub const PANEL_BORDER: &str = "#e0e0e0";
pub const BOT_BUBBLE: &str = "#f1f3f5";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#222222";
pub const TEXT_MUTED: &str = "#777777";
pub const TEXT_ON_ACCENT: &str = "#ffffff";
