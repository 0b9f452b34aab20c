//! Layout management and calculations

use crate::constants::{BOTTOM_NAV_HEIGHT, CONTENT_MAX_WIDTH, STATUS_BAR_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub page: Rect,
    pub nav: Rect,
    pub status: Option<Rect>,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into page, bottom navigation and optional status bar
    #[must_use]
    pub fn main_layout(area: Rect, show_status_bar: bool) -> ScreenAreas {
        let status_height = if show_status_bar { STATUS_BAR_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(BOTTOM_NAV_HEIGHT),
                Constraint::Length(status_height),
            ])
            .split(area);

        ScreenAreas {
            page: chunks[0],
            nav: chunks[1],
            status: show_status_bar.then_some(chunks[2]),
        }
    }

    /// Center page content horizontally, capped at the content max width
    #[must_use]
    pub fn content_column(area: Rect) -> Rect {
        let width = area.width.min(CONTENT_MAX_WIDTH);
        let x = area.x + (area.width - width) / 2;
        Rect::new(x, area.y, width, area.height)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
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

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
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

    /// Help panel dimensions (percent) based on screen size
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 90 } else { 70 };
        let help_height = if screen_height < 40 { 80 } else { 70 };
        (help_width, help_height)
    }
}
