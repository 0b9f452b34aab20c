//! Notification context: in-app notifications with read/dismiss state.

use super::ContextError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Reminder,
    Deadline,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
            read: false,
        }
    }
}

pub struct NotificationContext {
    state: watch::Sender<Vec<Notification>>,
}

impl NotificationContext {
    pub fn new(initial: Vec<Notification>) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }

    /// Snapshot, newest first
    pub fn notifications(&self) -> Vec<Notification> {
        let mut notifications = self.state.borrow().clone();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.state.borrow().iter().filter(|n| !n.read).count()
    }

    pub fn push(&self, kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Notification {
        let notification = Notification::new(kind, title, message);
        self.state.send_modify(|notifications| notifications.push(notification.clone()));
        log::debug!("Notification pushed: '{}'", notification.title);
        notification
    }

    pub fn mark_read(&self, id: Uuid) -> Result<(), ContextError> {
        let mut found = false;
        self.state.send_if_modified(|notifications| {
            match notifications.iter_mut().find(|n| n.id == id) {
                Some(notification) => {
                    found = true;
                    let changed = !notification.read;
                    notification.read = true;
                    changed
                }
                None => false,
            }
        });

        if found {
            Ok(())
        } else {
            Err(ContextError::NotificationNotFound(id))
        }
    }

    /// Mark everything read, returning how many were unread
    pub fn mark_all_read(&self) -> usize {
        let mut marked = 0;
        self.state.send_if_modified(|notifications| {
            for notification in notifications.iter_mut().filter(|n| !n.read) {
                notification.read = true;
                marked += 1;
            }
            marked > 0
        });
        marked
    }

    pub fn dismiss(&self, id: Uuid) -> Result<Notification, ContextError> {
        let mut removed = None;
        self.state.send_if_modified(|notifications| {
            match notifications.iter().position(|n| n.id == id) {
                Some(index) => {
                    removed = Some(notifications.remove(index));
                    true
                }
                None => false,
            }
        });

        removed.ok_or(ContextError::NotificationNotFound(id))
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.state.subscribe()
    }
}

impl Default for NotificationContext {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
