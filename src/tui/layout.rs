//! Layout definitions for the TUI
//!
//! The screen is a main panel over a one-line status bar. The main panel
//! splits into a header, the content table and an inline editor line.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            main: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the main panel
pub struct MainPanelLayout {
    /// Title and running totals
    pub header: Rect,
    /// Table area
    pub content: Rect,
    /// Inline editor line, empty unless an edit is in progress
    pub editor: Rect,
}

impl MainPanelLayout {
    pub fn new(area: Rect, editing: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(if editing { 3 } else { 0 }),
            ])
            .split(area);

        Self {
            header: chunks[0],
            content: chunks[1],
            editor: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rect_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(60, 12, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);

        let rect = centered_rect_fixed(20, 4, area);
        assert_eq!((rect.x, rect.y), (10, 3));
    }

    #[test]
    fn test_editor_line_only_when_editing() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(MainPanelLayout::new(area, false).editor.height, 0);
        assert_eq!(MainPanelLayout::new(area, true).editor.height, 3);
    }
}
