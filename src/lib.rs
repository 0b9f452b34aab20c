//! studentdesk - a terminal dashboard for student tasks
//!
//! This library provides the building blocks of the studentdesk TUI: a task
//! list, in-app notifications and a settings screen, composed from reusable
//! ratatui components and three shared contexts (theme, notifications, tasks).
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`contexts`] - Theme, notification and task state containers
//! * [`router`] - Path router and the bottom navigation table
//! * [`services`] - Profile service boundary
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Date helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Application-wide state: theme, notifications and tasks
pub mod contexts;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Current location and navigation items
pub mod router;

/// Service boundaries for profile updates and account deletion
pub mod services;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;
