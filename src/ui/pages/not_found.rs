use crate::ui::core::{actions::Action, Component};
use crate::ui::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Shown for any path outside the navigation table
#[derive(Debug, Default)]
pub struct NotFoundPage {
    pub path: String,
}

impl NotFoundPage {
    pub fn update_data(&mut self, path: &str) {
        self.path = path.to_string();
    }
}

impl Component for NotFoundPage {
    fn handle_key_events(&mut self, _key: crossterm::event::KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled("404", palette.heading())),
            Line::from(Span::styled(format!("No page at '{}'", self.path), palette.muted_text())),
            Line::from(""),
            Line::from(Span::styled("Press 1-4 to pick a page or 'b' to go back.", palette.muted_text())),
        ];
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), rect);
    }
}
