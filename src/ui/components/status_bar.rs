//! Status bar component

use crate::router::Page;
use crate::ui::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Shortcut hint for a page
    pub fn shortcuts(page: Page) -> &'static str {
        match page {
            Page::Dashboard => "t: tasks • n: notifications • 1-4/←→: navigate • T: theme • ?: help • q: quit",
            Page::Tasks => "a: add • e: edit • Space: done • p: priority • d: delete • ?: help • q: quit",
            Page::Notifications => "Enter: mark read • m: mark all • d: dismiss • ?: help • q: quit",
            Page::Settings => "↑↓/Tab: move • Enter/Space: activate • S: snapshot • Esc: leave field • q: quit",
            Page::NotFound => "1-4: navigate • b: back • q: quit",
        }
    }

    /// Render the status bar; `busy` replaces the shortcuts while a background call runs
    pub fn render(f: &mut Frame, area: Rect, page: Page, busy: Option<&str>, palette: &Palette) {
        let (status_text, color) = match busy {
            Some(message) => (format!("🔄 {}", message), palette.warning),
            None => (Self::shortcuts(page).to_string(), palette.muted),
        };

        let status_bar = Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).bg(palette.background));

        f.render_widget(status_bar, area);
    }
}
