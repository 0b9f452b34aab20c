//! Button: a styled, focusable action label.

use crate::ui::styles::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    /// Outlined look, used while an action is in flight
    Secondary,
    Danger,
}

#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn style(&self, palette: &Palette) -> Style {
        let style = match self.variant {
            ButtonVariant::Primary => Style::default().fg(palette.surface).bg(palette.primary),
            ButtonVariant::Danger => Style::default().fg(palette.surface).bg(palette.danger),
            ButtonVariant::Secondary => Style::default().fg(palette.primary).bg(palette.surface),
        };

        if self.focused {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }

    pub fn line(&self, palette: &Palette) -> Line<'a> {
        let marker = if self.focused { "▶ " } else { "  " };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(format!(" {} ", self.label), self.style(palette)),
        ])
    }
}
