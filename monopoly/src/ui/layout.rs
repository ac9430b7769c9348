//! Layout calculations for the table TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the dice form, borders included.
const FORM_HEIGHT: u16 = 6;

/// Calculate the main layout areas
pub struct AppLayout {
    pub title_area: Rect,
    pub form_area: Rect,
    pub journal_area: Rect,
    pub costs_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        // Main vertical split
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(8),    // Main content
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
            ])
            .split(area);

        // Content area: form + journal on the left, costs on the right
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[1]);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)])
            .split(content_chunks[0]);

        Self {
            title_area: main_chunks[0],
            form_area: left_chunks[0],
            journal_area: left_chunks[1],
            costs_area: content_chunks[1],
            status_bar: main_chunks[2],
            hotkey_bar: main_chunks[3],
        }
    }
}

/// Calculate fixed-size centered popup
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_screen() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::calculate(area);

        assert_eq!(layout.title_area.height, 1);
        assert_eq!(layout.form_area.height, FORM_HEIGHT);
        assert_eq!(layout.status_bar.y, 28);
        assert_eq!(layout.hotkey_bar.y, 29);
        assert_eq!(
            layout.form_area.width + layout.costs_area.width,
            area.width
        );
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_rect_fixed(50, 5, area);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.y, 2);
    }
}
