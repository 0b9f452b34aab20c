use super::task_manager::BackgroundKind;
use crate::services::profile::Profile;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(String),
    NextPage,
    PreviousPage,
    NavigateBack,

    // Theme
    ToggleTheme,
    CycleIconTheme,

    // Task operations
    /// Quick-add text, see [`TaskDraft::parse`](crate::contexts::TaskDraft::parse)
    CreateTask {
        input: String,
    },
    EditTask {
        id: Uuid,
        input: String,
    },
    ToggleTask(Uuid),
    CyclePriority(Uuid),
    DeleteTask(Uuid),

    // Notification operations
    MarkNotificationRead(Uuid),
    MarkAllNotificationsRead,
    DismissNotification(Uuid),

    // Profile service
    SubmitProfile(Profile),
    ProfileSaved(Profile),
    DeleteAccount,
    AccountDeleted,
    ServiceFailed {
        kind: BackgroundKind,
        error: String,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    TaskCreation,
    TaskEdit { task_id: Uuid, input: String },
    DeleteConfirmation { item_type: String, item_id: Uuid, label: String },
    Error(String),
    Info(String),
    Help,
    Logs,
}
