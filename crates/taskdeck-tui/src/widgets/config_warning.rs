//! Static view shown instead of the app when the owner id is unusable

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons, styles};

pub struct ConfigWarning<'a> {
    message: &'a str,
}

impl<'a> ConfigWarning<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for ConfigWarning<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" taskdeck ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(icons::WARNING, styles::status_yellow()),
                Span::styled(" Configuration required", styles::status_yellow()),
            ]),
            Line::raw(""),
            Line::from(Span::styled(self.message, styles::text_primary())),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Run ", styles::text_secondary()),
                Span::styled("taskdeck init-config", styles::accent()),
                Span::styled(" to create a config file.", styles::text_secondary()),
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::styled("q", styles::keybinding()),
                Span::styled(" quit", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
