//! Layout management for the TUI.

use ratatui::layout::{Constraint, Flex, Layout as RatatuiLayout, Rect};

/// Height of the starred-coin strip, borders included.
const STRIP_HEIGHT: u16 = 10;

/// Narrowest a popup gets before it fills the terminal width.
const MIN_POPUP_WIDTH: u16 = 40;

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Tab bar area.
    pub tab_area: Rect,
    /// Main content area.
    pub main_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect) -> Self {
        let [status_area, tab_area, main_area] = RatatuiLayout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Self {
            status_area,
            tab_area,
            main_area,
        }
    }

    /// Split the dashboard into the watchlist strip and the coin table.
    /// Short terminals drop the strip.
    pub fn dashboard(main: Rect) -> (Option<Rect>, Rect) {
        if main.height < STRIP_HEIGHT + 10 {
            return (None, main);
        }
        let [strip, table] =
            RatatuiLayout::vertical([Constraint::Length(STRIP_HEIGHT), Constraint::Min(0)])
                .areas(main);
        (Some(strip), table)
    }

    /// Width of notification and error popups.
    pub fn popup_width(&self) -> u16 {
        (self.main_area.width / 2)
            .max(MIN_POPUP_WIDTH)
            .min(self.main_area.width)
    }

    /// A popup `height` rows tall, centered over the main area.
    pub fn popup(&self, height: u16) -> Rect {
        let [row] = RatatuiLayout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(self.main_area);
        let [popup] = RatatuiLayout::horizontal([Constraint::Length(self.popup_width())])
            .flex(Flex::Center)
            .areas(row);
        popup
    }
}

/// A rectangle taking the given percentages of `area`, centered in it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = RatatuiLayout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = RatatuiLayout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_fits_tiny_terminal() {
        let layout = Layout::new(Rect::new(0, 0, 20, 4));
        let popup = layout.popup(4);
        assert_eq!(popup.width, 20);
        assert!(popup.height <= layout.main_area.height);
        assert!(popup.y >= layout.main_area.y);
    }

    #[test]
    fn test_popup_is_centered() {
        let layout = Layout::new(Rect::new(0, 0, 120, 42));
        let popup = layout.popup(4);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 4);
        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 2 + (40 - 4) / 2);
    }

    #[test]
    fn test_dashboard_split() {
        let (strip, table) = Layout::dashboard(Rect::new(0, 2, 120, 40));
        assert_eq!(strip.map(|s| s.height), Some(STRIP_HEIGHT));
        assert_eq!(table.height, 30);

        let (strip, table) = Layout::dashboard(Rect::new(0, 2, 80, 15));
        assert!(strip.is_none());
        assert_eq!(table.height, 15);
    }

    #[test]
    fn test_centered_rect() {
        let area = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(25, 10, 50, 20));
    }
}
