//! Theme context: the single active light/dark value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => anyhow::bail!("Unknown theme '{}', expected 'light' or 'dark'", other),
        }
    }
}

/// Holds the current theme and notifies subscribers when it flips
pub struct ThemeContext {
    state: watch::Sender<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }

    pub fn theme(&self) -> Theme {
        *self.state.borrow()
    }

    /// Flip light and dark, returning the new value
    pub fn toggle(&self) -> Theme {
        self.state.send_modify(|theme| *theme = theme.toggled());
        let theme = self.theme();
        log::info!("Theme toggled to {}", theme);
        theme
    }

    pub fn set(&self, theme: Theme) {
        self.state.send_if_modified(|current| {
            if *current == theme {
                false
            } else {
                *current = theme;
                true
            }
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.state.subscribe()
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
