//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// App title row
    pub title: Rect,

    /// New-item input with toggle-all indicator
    pub header: Rect,

    /// Item rows
    pub list: Rect,

    /// Remaining count, filters and clear-completed action
    pub footer: Rect,

    /// Error banner, only while an error is visible
    pub error: Option<Rect>,

    /// Key binding hint line, only when enabled in settings
    pub hints: Option<Rect>,
}

/// Create the main screen layout
pub fn create(area: Rect, has_error: bool, show_hints: bool) -> ScreenAreas {
    let mut constraints = vec![
        Constraint::Length(1), // Title
        Constraint::Length(3), // Header (bordered input)
        Constraint::Min(3),    // List (bordered)
        Constraint::Length(3), // Footer (bordered)
    ];
    if has_error {
        constraints.push(Constraint::Length(3));
    }
    if show_hints {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::vertical(constraints).split(area);

    let mut next = 4;
    let error = has_error.then(|| {
        let rect = chunks[next];
        next += 1;
        rect
    });
    let hints = show_hints.then(|| chunks[next]);

    ScreenAreas {
        title: chunks[0],
        header: chunks[1],
        list: chunks[2],
        footer: chunks[3],
        error,
        hints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_optional_rows() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false, false);

        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 3);
        // List gets the rest: 24 - 1 - 3 - 3
        assert_eq!(layout.list.height, 17);
        assert!(layout.error.is_none());
        assert!(layout.hints.is_none());
    }

    #[test]
    fn test_layout_with_error_and_hints() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true, true);

        let error = layout.error.unwrap();
        let hints = layout.hints.unwrap();
        assert_eq!(error.height, 3);
        assert_eq!(hints.height, 1);
        assert_eq!(hints.y, 23);
        assert_eq!(error.y, layout.footer.y + 3);
        assert_eq!(layout.list.height, 13);
    }

    #[test]
    fn test_layout_hints_only() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false, true);

        assert!(layout.error.is_none());
        assert_eq!(layout.hints.unwrap().y, 23);
    }
}
