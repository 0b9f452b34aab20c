//! Configuration management for studentdesk
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_PROFILE_EMAIL, DEFAULT_PROFILE_NAME, DEFAULT_PROFILE_UNIVERSITY, ROUTE_DASHBOARD,
    ROUTE_ROOT,
};
use crate::contexts::theme::Theme;
use crate::icons::IconTheme;
use crate::router;
use crate::services::profile::Profile;
use crate::utils::datetime;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub appearance: AppearanceConfig,
    pub profile: ProfileConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Route opened on startup and when navigating to "/"
    /// Options: "/dashboard", "/tasks", "/notifications", "/settings"
    pub default_route: String,
    /// Seed the task and notification contexts with sample data
    pub demo_data: bool,
    /// Show the one-line status bar under the navigation
    pub show_status_bar: bool,
}

/// Appearance configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Initial theme, "light" or "dark"
    pub theme: Theme,
    /// Glyph set, "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Initial profile values shown in the settings form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub email: String,
    pub university: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
    /// Level filter: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_route: ROUTE_DASHBOARD.to_string(),
            demo_data: true,
            show_status_bar: true,
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROFILE_NAME.to_string(),
            email: DEFAULT_PROFILE_EMAIL.to_string(),
            university: DEFAULT_PROFILE_UNIVERSITY.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl ProfileConfig {
    pub fn to_profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            email: self.email.clone(),
            university: self.university.clone(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter, falls back to `Info` on unknown values
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("studentdesk.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("studentdesk").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let route = self.ui.default_route.as_str();
        if route == ROUTE_ROOT || router::nav_item_for(route).is_none() {
            let available: Vec<&str> = router::NAV_ITEMS.iter().map(|item| item.path).collect();
            anyhow::bail!(
                "default_route '{}' is not a navigable route. Available routes: {}",
                route,
                available.join(", ")
            );
        }

        if LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!(
                "Invalid logging level '{}': expected off, error, warn, info, debug or trace",
                self.logging.level
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# studentdesk Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("studentdesk"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
