//! Toggle switch rendered as a two-state pill.

use crate::ui::styles::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    on: bool,
    focused: bool,
}

impl Toggle {
    pub fn new(on: bool) -> Self {
        Self { on, focused: false }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn span(&self, palette: &Palette) -> Span<'static> {
        let (text, style) = if self.on {
            (" ON ● ", Style::default().fg(palette.surface).bg(palette.primary))
        } else {
            (" ● OFF", Style::default().fg(palette.muted).bg(palette.border))
        };

        let style = if self.focused {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        };
        Span::styled(text, style)
    }
}
