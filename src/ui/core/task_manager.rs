use super::actions::Action;
use crate::constants::{OPERATION_ACCOUNT_DELETION, OPERATION_PROFILE_UPDATE};
use crate::services::profile::{Profile, ProfileService};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundKind {
    ProfileUpdate,
    AccountDeletion,
}

impl BackgroundKind {
    /// Human readable operation name used in logs
    pub fn label(self) -> &'static str {
        match self {
            BackgroundKind::ProfileUpdate => OPERATION_PROFILE_UPDATE,
            BackgroundKind::AccountDeletion => OPERATION_ACCOUNT_DELETION,
        }
    }
}

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub kind: BackgroundKind,
    pub handle: JoinHandle<()>,
    pub started_at: std::time::Instant,
}

/// Runs service calls off the UI loop and reports back through an action channel
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a profile update; answers with `ProfileSaved` or `ServiceFailed`
    pub fn spawn_profile_update(&mut self, service: Arc<dyn ProfileService>, profile: Profile) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match service.update_profile(&profile).await {
                Ok(saved) => Action::ProfileSaved(saved),
                Err(e) => Action::ServiceFailed {
                    kind: BackgroundKind::ProfileUpdate,
                    error: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.register(BackgroundKind::ProfileUpdate, handle)
    }

    /// Spawn an account deletion; answers with `AccountDeleted` or `ServiceFailed`
    pub fn spawn_account_deletion(&mut self, service: Arc<dyn ProfileService>) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match service.delete_account().await {
                Ok(()) => Action::AccountDeleted,
                Err(e) => Action::ServiceFailed {
                    kind: BackgroundKind::AccountDeletion,
                    error: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.register(BackgroundKind::AccountDeletion, handle)
    }

    fn register(&mut self, kind: BackgroundKind, handle: JoinHandle<()>) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                kind,
                handle,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Drop finished tasks, returning their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }
        finished
    }

    /// Whether a task of this kind is still running
    pub fn is_running(&self, kind: BackgroundKind) -> bool {
        self.tasks
            .values()
            .any(|task| task.kind == kind && !task.handle.is_finished())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of tracked tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
