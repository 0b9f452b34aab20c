//! Full-screen views, one per route.
//!
//! Pages hold copies of the context data they display, refreshed through
//! `update_data`, and report user intent as [`Action`](crate::ui::core::Action)s.

pub mod dashboard;
pub mod not_found;
pub mod notifications;
pub mod settings;
pub mod tasks;

pub use dashboard::DashboardPage;
pub use not_found::NotFoundPage;
pub use notifications::NotificationsPage;
pub use settings::{NotificationPreferences, PreferenceFlag, SettingsFocus, SettingsPage};
pub use tasks::TasksPage;
