//! Theme-aware colors shared by every widget.
//!
//! Pages never pick colors themselves; they ask the [`Palette`] derived from
//! the current [`Theme`] so that toggling the theme restyles the whole tree.

use crate::contexts::Theme;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub border: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(248, 249, 250),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(33, 37, 41),
            muted: Color::Rgb(108, 117, 125),
            primary: Color::Rgb(30, 58, 95),
            accent: Color::Rgb(13, 110, 253),
            success: Color::Rgb(25, 135, 84),
            warning: Color::Rgb(204, 133, 0),
            danger: Color::Rgb(220, 53, 69),
            border: Color::Rgb(206, 212, 218),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 20, 24),
            surface: Color::Rgb(30, 33, 39),
            text: Color::Rgb(230, 232, 235),
            muted: Color::Rgb(140, 148, 158),
            primary: Color::Rgb(130, 170, 230),
            accent: Color::Rgb(110, 168, 254),
            success: Color::Rgb(72, 199, 142),
            warning: Color::Rgb(255, 193, 7),
            danger: Color::Rgb(255, 107, 107),
            border: Color::Rgb(60, 66, 75),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Style for the element holding keyboard focus
    pub fn focused(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
