//! Glyphs used across widgets.

pub const CHECKBOX_ON: &str = "[x]";
pub const CHECKBOX_OFF: &str = "[ ]";

/// Toggle-all indicator in the header
pub const TOGGLE_ALL: &str = "\u{276f}"; // ❯

pub const WARNING: &str = "\u{26a0}"; // ⚠

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation frame (advanced by ticks)
pub fn spinner(frame: usize) -> &'static str {
    // Two ticks per glyph keeps the animation readable at 20 FPS
    SPINNER_FRAMES[(frame / 2) % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner(0), spinner(1));
        assert_ne!(spinner(0), spinner(2));
        assert_eq!(spinner(0), spinner(SPINNER_FRAMES.len() * 2));
    }
}
