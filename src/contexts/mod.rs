//! Application-wide state containers.
//!
//! Each context owns one slice of shared state behind a `tokio::sync::watch`
//! channel: readers take a snapshot or [`subscribe`](theme::ThemeContext::subscribe)
//! to changes, and only the mutators defined here write to it. Contexts are
//! constructed explicitly by [`AppContext`](crate::ui::core::AppContext) in the
//! order Theme → Notification → Task.

pub mod notifications;
pub mod sample;
pub mod tasks;
pub mod theme;

pub use notifications::{Notification, NotificationContext, NotificationKind};
pub use tasks::{Priority, Task, TaskContext, TaskDraft, TaskStats, TaskUpdate};
pub use theme::{Theme, ThemeContext};

use uuid::Uuid;

/// Errors returned by context mutators
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Notification not found: {0}")]
    NotificationNotFound(Uuid),

    #[error("Task title cannot be empty")]
    EmptyTitle,
}
