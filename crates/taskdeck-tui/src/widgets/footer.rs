//! Footer panel: remaining count, filter selector and clear-completed action

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use taskdeck_app::state::AppState;
use taskdeck_core::FilterMode;

use crate::theme::styles;

pub const CLEAR_COMPLETED: &str = "Clear completed";

/// "1 item left" / "N items left"
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

pub struct Footer {
    remaining: usize,
    filter: FilterMode,
    /// Clear completed is enabled only when a completed item exists
    can_clear: bool,
}

impl Footer {
    pub fn new(state: &AppState) -> Self {
        Self {
            remaining: state.remaining_count(),
            filter: state.filter,
            can_clear: state.has_completed(),
        }
    }

    fn filter_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (index, mode) in FilterMode::ALL_MODES.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if *mode == self.filter {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(
                format!("{} {}", index + 1, mode.label()),
                style,
            ));
        }
        Line::from(spans)
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(Span::styled(
            items_left_label(self.remaining),
            styles::text_secondary(),
        ))
        .render(inner, buf);

        Paragraph::new(self.filter_line())
            .alignment(Alignment::Center)
            .render(inner, buf);

        let clear_style = if self.can_clear {
            styles::text_primary()
        } else {
            styles::text_muted()
        };
        Paragraph::new(Span::styled(CLEAR_COMPLETED, clear_style))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use taskdeck_core::Item;

    fn state(completed: &[bool]) -> AppState {
        let mut state = AppState::new(1);
        state.items = completed
            .iter()
            .enumerate()
            .map(|(i, completed)| Item {
                id: i as u64 + 1,
                user_id: 1,
                title: format!("t{}", i),
                completed: *completed,
            })
            .collect();
        state
    }

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(5), "5 items left");
    }

    #[test]
    fn test_footer_counts_remaining() {
        let state = state(&[false, true, false]);
        let mut term = TestTerminal::new();

        term.render_widget(Footer::new(&state), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("2 items left"));
        assert!(term.buffer_contains("1 All"));
        assert!(term.buffer_contains("2 Active"));
        assert!(term.buffer_contains("3 Completed"));
        assert!(term.buffer_contains(CLEAR_COMPLETED));
    }

    #[test]
    fn test_clear_completed_enabled_only_with_completed_items() {
        assert!(!Footer::new(&state(&[false, false])).can_clear);
        assert!(Footer::new(&state(&[false, true])).can_clear);
    }
}
