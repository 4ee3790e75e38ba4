//! Widget theme: color constants and the embedded stylesheet.

mod colors;
mod styles;

pub use colors::*;
pub use styles::WIDGET_STYLES;
