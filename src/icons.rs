//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to render the application icons
//! (navigation, profile, appearance) supporting emoji, Unicode, and ASCII
//! glyph themes. Every icon is rendered at a [`IconSize`] with a caller
//! supplied [`Style`].

use ratatui::{style::Style, text::Span};
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Every icon the application draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Dashboard,
    Tasks,
    Notification,
    Settings,
    User,
    Moon,
    Sun,
}

/// Rendered width of an icon in terminal cells.
///
/// The glyph is centered inside the cell budget, so a `Large` icon reserves
/// visual space around itself the way a bigger pictogram would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl IconSize {
    /// Number of terminal cells reserved for the icon
    #[must_use]
    pub fn cells(self) -> usize {
        match self {
            IconSize::Small => 2,
            IconSize::Medium => 3,
            IconSize::Large => 5,
        }
    }
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Raw glyph for an icon in the current theme
    #[must_use]
    pub fn glyph(&self, icon: Icon) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => match icon {
                Icon::Dashboard => "📊",
                Icon::Tasks => "📝",
                Icon::Notification => "🔔",
                Icon::Settings => "⚙️",
                Icon::User => "👤",
                Icon::Moon => "🌙",
                Icon::Sun => "☀️",
            },
            IconTheme::Unicode => match icon {
                Icon::Dashboard => "▦",
                Icon::Tasks => "☰",
                Icon::Notification => "♪",
                Icon::Settings => "⚙",
                Icon::User => "☺",
                Icon::Moon => "☾",
                Icon::Sun => "☼",
            },
            IconTheme::Ascii => match icon {
                Icon::Dashboard => "#",
                Icon::Tasks => "=",
                Icon::Notification => "!",
                Icon::Settings => "*",
                Icon::User => "@",
                Icon::Moon => "C",
                Icon::Sun => "O",
            },
        }
    }

    /// Render an icon as a styled span padded to its size
    ///
    /// Padding is measured in display cells, so wide emoji glyphs take the
    /// same room as their single-cell counterparts.
    #[must_use]
    pub fn render(&self, icon: Icon, size: IconSize, style: Style) -> Span<'static> {
        let glyph = self.glyph(icon);
        let padding = size.cells().saturating_sub(Span::raw(glyph).width());
        let left = padding / 2;
        let content = format!("{}{}{}", " ".repeat(left), glyph, " ".repeat(padding - left));
        Span::styled(content, style)
    }

    /// Icon for the appearance section, moon when dark and sun when light
    #[must_use]
    pub fn theme_icon(&self, dark: bool) -> Icon {
        if dark {
            Icon::Moon
        } else {
            Icon::Sun
        }
    }

    /// Marker used in front of unread notifications
    #[must_use]
    pub fn unread_marker(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "🔵",
            IconTheme::Unicode => "●",
            IconTheme::Ascii => "*",
        }
    }

    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "🔳",
            IconTheme::Unicode => "□",
            IconTheme::Ascii => "[ ]",
        }
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "✅",
            IconTheme::Unicode => "✓",
            IconTheme::Ascii => "[X]",
        }
    }
}
