//! Centralized theme for the taskdeck TUI.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Glyphs for checkboxes, spinner and indicators

pub mod icons;
pub mod palette;
pub mod styles;
