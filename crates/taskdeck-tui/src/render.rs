//! Main render/view function (View in TEA pattern)

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use taskdeck_app::state::AppState;

use crate::theme::{palette, styles};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; everything shown is derived on each call.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    if let Some(warning) = state.config_warning.as_deref() {
        frame.render_widget(widgets::ConfigWarning::new(warning), area);
        return;
    }

    let areas = layout::create(area, state.error.is_some(), state.ui.show_key_hints);

    let title = Paragraph::new(Line::from(Span::styled("todos", styles::accent_bold())))
        .alignment(Alignment::Center);
    frame.render_widget(title, areas.title);

    let header = widgets::HeaderPanel::new(state);
    let header_cursor = header.cursor_position(areas.header);
    frame.render_widget(header, areas.header);

    let list = widgets::ItemList::new(state);
    let list_cursor = list.cursor_position(areas.list);
    frame.render_widget(list, areas.list);

    frame.render_widget(widgets::Footer::new(state), areas.footer);

    if let (Some(kind), Some(error_area)) = (state.error, areas.error) {
        frame.render_widget(widgets::ErrorBanner::new(kind), error_area);
    }

    if let Some(hints_area) = areas.hints {
        frame.render_widget(widgets::KeyHints::new(state), hints_area);
    }

    if let Some(position) = list_cursor.or(header_cursor) {
        frame.set_cursor_position(position);
    }
}
