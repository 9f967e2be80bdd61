//! List panel: one row per item of the filtered view, plus the placeholder
//! row of an in-flight add

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use taskdeck_app::state::{AppState, Focus, LoadPhase};
use taskdeck_core::Item;

use crate::theme::{icons, styles};

pub const EDITOR_PLACEHOLDER: &str = "Empty todo will be deleted";
pub const LOADING_TEXT: &str = "Loading…";

/// Spinner slot, checkbox, and the spaces around them
const TITLE_OFFSET: u16 = 7;

pub struct ItemList<'a> {
    state: &'a AppState,
    items: Vec<&'a Item>,
    placeholder: Option<Item>,
}

impl<'a> ItemList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            items: state.visible_items(),
            placeholder: state.placeholder_item(),
        }
    }

    fn focused(&self) -> bool {
        self.state.focus == Focus::List
    }

    /// First visible row. The placeholder row, when present, is always on
    /// screen; otherwise the selection is.
    fn scroll_offset(&self, height: u16) -> usize {
        let height = height as usize;
        if height == 0 {
            return 0;
        }
        let anchor = if self.placeholder.is_some() {
            self.items.len()
        } else {
            self.state.selected
        };
        anchor.saturating_sub(height - 1)
    }

    /// Cursor position inside the row editor, if a row is being edited
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        let editor = self.state.editor.as_ref()?;
        let inner = inner_area(area)?;
        let index = self.items.iter().position(|item| item.id == editor.id)?;
        let row = index.checked_sub(self.scroll_offset(inner.height))?;
        if row >= inner.height as usize {
            return None;
        }
        let x = inner.x + TITLE_OFFSET + editor.draft.width() as u16;
        Some((
            x.min(inner.x + inner.width.saturating_sub(1)),
            inner.y + row as u16,
        ))
    }

    fn item_line(&self, index: usize, item: &'a Item) -> Line<'a> {
        let state = self.state;
        let selected = index == state.selected && self.focused();

        let spinner = if state.is_loading(item.id) {
            Span::styled(icons::spinner(state.spinner_frame), styles::status_yellow())
        } else {
            Span::raw(" ")
        };

        let (checkbox, checkbox_style) = if item.completed {
            (icons::CHECKBOX_ON, styles::status_green())
        } else {
            (icons::CHECKBOX_OFF, styles::text_secondary())
        };

        let editing = state.editor.as_ref().filter(|editor| editor.id == item.id);
        let title = match editing {
            Some(editor) if editor.draft.is_empty() => {
                Span::styled(EDITOR_PLACEHOLDER, styles::placeholder())
            }
            Some(editor) => Span::styled(editor.draft.as_str(), styles::accent()),
            None if item.completed => Span::styled(item.title.as_str(), styles::completed_title()),
            None => Span::styled(item.title.as_str(), styles::text_primary()),
        };

        let line = Line::from(vec![
            Span::raw(" "),
            spinner,
            Span::raw(" "),
            Span::styled(checkbox, checkbox_style),
            Span::raw(" "),
            title,
        ]);

        if selected && editing.is_none() {
            line.style(styles::focused_selected())
        } else {
            line
        }
    }

    /// Non-interactive row for the item being added, always loading
    fn placeholder_line(&self, placeholder: &Item) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                icons::spinner(self.state.spinner_frame),
                styles::status_yellow(),
            ),
            Span::raw(" "),
            Span::styled(icons::CHECKBOX_OFF, styles::text_muted()),
            Span::raw(" "),
            Span::styled(placeholder.title.clone(), styles::text_muted()),
        ])
    }
}

fn inner_area(area: Rect) -> Option<Rect> {
    let inner = styles::glass_block(false).inner(area);
    (inner.width > 0 && inner.height > 0).then_some(inner)
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused() || self.state.editor.is_some());
        block.render(area, buf);

        let Some(inner) = inner_area(area) else {
            return;
        };

        if self.state.load_phase == LoadPhase::Loading {
            Paragraph::new(Line::from(Span::styled(LOADING_TEXT, styles::text_muted())))
                .render(inner, buf);
            return;
        }

        let mut lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, &item)| self.item_line(index, item))
            .collect();

        // Appended after the filtered rows, never filtered itself
        if let Some(placeholder) = &self.placeholder {
            lines.push(self.placeholder_line(placeholder));
        }

        let offset = self.scroll_offset(inner.height);
        let visible: Vec<Line> = lines
            .into_iter()
            .skip(offset)
            .take(inner.height as usize)
            .collect();

        Paragraph::new(visible).render(inner, buf);
    }
}
