//! Header panel: toggle-all indicator and the new-item input

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use taskdeck_app::state::{AppState, Focus};

use crate::theme::{icons, styles};

pub const PLACEHOLDER: &str = "What needs to be done?";

/// Toggle-all glyph plus separating space
const PREFIX_WIDTH: u16 = 2;

pub struct HeaderPanel<'a> {
    draft: &'a str,
    focused: bool,
    /// Input is disabled while an add is in flight
    disabled: bool,
    all_completed: bool,
}

impl<'a> HeaderPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            draft: &state.header.draft,
            focused: state.focus == Focus::Header && state.editor.is_none(),
            disabled: state.add_in_flight,
            all_completed: state.all_visible_completed(),
        }
    }

    /// Terminal cursor position at the end of the draft, if the input is
    /// focused and enabled
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        if !self.focused || self.disabled || area.width < 3 || area.height < 3 {
            return None;
        }
        let inner_x = area.x + 1;
        let max_x = area.x + area.width - 2;
        let x = inner_x + PREFIX_WIDTH + self.draft.width() as u16;
        Some((x.min(max_x), area.y + 1))
    }
}

impl Widget for HeaderPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let toggle_style = if self.all_completed {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };

        let input = if self.draft.is_empty() {
            Span::styled(PLACEHOLDER, styles::placeholder())
        } else if self.disabled {
            Span::styled(self.draft, styles::text_muted())
        } else {
            Span::styled(self.draft, styles::text_primary())
        };

        let line = Line::from(vec![
            Span::styled(icons::TOGGLE_ALL, toggle_style),
            Span::raw(" "),
            input,
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
