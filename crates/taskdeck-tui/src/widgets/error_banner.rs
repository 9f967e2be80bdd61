//! Error banner: the current error with its dismiss hint

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use taskdeck_core::ErrorKind;

use crate::theme::{icons, styles};

pub struct ErrorBanner {
    kind: ErrorKind,
}

impl ErrorBanner {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl Widget for ErrorBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::status_red());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(Line::from(vec![
            Span::styled(icons::WARNING, styles::status_red()),
            Span::raw(" "),
            Span::styled(self.kind.message(), styles::status_red()),
        ]))
        .render(inner, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("x", styles::keybinding()),
            Span::styled(" dismiss", styles::text_muted()),
        ]))
        .alignment(Alignment::Right)
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_banner_shows_fixed_message() {
        let mut term = TestTerminal::new();

        term.render_widget(
            ErrorBanner::new(ErrorKind::EmptyTitle),
            Rect::new(0, 0, 60, 3),
        );

        assert!(term.buffer_contains("Title should not be empty"));
        assert!(term.buffer_contains("dismiss"));
    }
}
