//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Routes
pub const ROUTE_ROOT: &str = "/";
pub const ROUTE_DASHBOARD: &str = "/dashboard";
pub const ROUTE_TASKS: &str = "/tasks";
pub const ROUTE_NOTIFICATIONS: &str = "/notifications";
pub const ROUTE_SETTINGS: &str = "/settings";

// Profile placeholders
pub const DEFAULT_PROFILE_NAME: &str = "Student Name";
pub const DEFAULT_PROFILE_EMAIL: &str = "student@email.com";
pub const DEFAULT_PROFILE_UNIVERSITY: &str = "University Name";

// Page headers
pub const SETTINGS_TITLE: &str = "Settings";
pub const SETTINGS_SUBTITLE: &str = "Manage your account and preferences";
pub const DANGER_ZONE_WARNING: &str = "Once you delete your account, there is no going back. Please be certain.";

// Success Messages
pub const SUCCESS_PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const SUCCESS_ACCOUNT_DELETED: &str = "Account deleted";
pub const SUCCESS_TASK_CREATED: &str = "✅ Task created";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted";
pub const SUCCESS_TASK_COMPLETED: &str = "✅ Task completed";

// Error Messages
pub const ERROR_PROFILE_UPDATE_FAILED: &str = "❌ Failed to update profile";
pub const ERROR_ACCOUNT_DELETE_FAILED: &str = "❌ Failed to delete account";
pub const ERROR_TASK_OPERATION_FAILED: &str = "❌ Task operation failed";
pub const ERROR_NOTIFICATION_OPERATION_FAILED: &str = "❌ Notification operation failed";

// Background operation names
pub const OPERATION_PROFILE_UPDATE: &str = "Profile update";
pub const OPERATION_ACCOUNT_DELETION: &str = "Account deletion";

// Status bar text
pub const STATUS_SAVING_PROFILE: &str = "Saving profile...";
pub const STATUS_DELETING_ACCOUNT: &str = "Deleting account...";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// UI Layout Constants
/// Height of the bottom navigation bar in rows
pub const BOTTOM_NAV_HEIGHT: u16 = 3;
/// Height of the status bar in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;
/// Maximum content width, mirrors a centered column on wide screens
pub const CONTENT_MAX_WIDTH: u16 = 100;
/// Number of upcoming tasks listed on the dashboard
pub const DASHBOARD_UPCOMING_LIMIT: usize = 5;
