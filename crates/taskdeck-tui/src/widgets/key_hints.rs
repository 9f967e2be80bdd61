//! One-line key binding hints for the focused panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use taskdeck_app::state::{AppState, Focus};

use crate::theme::styles;

pub struct KeyHints {
    hints: &'static [(&'static str, &'static str)],
}

const HEADER_HINTS: &[(&str, &str)] = &[
    ("Enter", "add"),
    ("^T", "toggle all"),
    ("^U", "clear"),
    ("Tab", "list"),
    ("^C", "quit"),
];

const LIST_HINTS: &[(&str, &str)] = &[
    ("Space", "toggle"),
    ("Enter", "edit"),
    ("d", "delete"),
    ("a", "toggle all"),
    ("c", "clear completed"),
    ("f", "filter"),
    ("i", "new"),
    ("q", "quit"),
];

const EDITING_HINTS: &[(&str, &str)] = &[("Enter", "save"), ("Esc", "cancel")];

impl KeyHints {
    pub fn new(state: &AppState) -> Self {
        let hints = if state.editor.is_some() {
            EDITING_HINTS
        } else {
            match state.focus {
                Focus::Header => HEADER_HINTS,
                Focus::List => LIST_HINTS,
            }
        };
        Self { hints }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
