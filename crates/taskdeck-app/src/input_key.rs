//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the reducer and its tests never depend on crossterm.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+t, ...)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
