//! Card: the bordered surface every page section sits on.

use crate::ui::styles::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct Card<'a> {
    title: Vec<Span<'a>>,
    danger: bool,
    highlighted: bool,
}

impl<'a> Card<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title spans, usually an icon followed by a label
    pub fn title(mut self, spans: Vec<Span<'a>>) -> Self {
        self.title = spans;
        self
    }

    /// Red border and title, for destructive sections
    pub fn danger(mut self, danger: bool) -> Self {
        self.danger = danger;
        self
    }

    /// Accent border, for the card holding keyboard focus
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn block(&self, palette: &Palette) -> Block<'a> {
        let border_color = if self.danger {
            palette.danger
        } else if self.highlighted {
            palette.accent
        } else {
            palette.border
        };
        let title_color = if self.danger { palette.danger } else { palette.primary };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.danger { BorderType::Thick } else { BorderType::Rounded })
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.surface).fg(palette.text))
            .padding(Padding::horizontal(1));

        if !self.title.is_empty() {
            block = block
                .title(Line::from(self.title.clone()))
                .title_style(Style::default().fg(title_color).add_modifier(Modifier::BOLD));
        }
        block
    }

    /// Draw the card frame and return the inner content area
    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) -> Rect {
        let block = self.block(palette);
        let inner = block.inner(area);
        f.render_widget(block, area);
        inner
    }
}
