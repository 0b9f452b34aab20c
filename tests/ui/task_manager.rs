use std::sync::Arc;
use studentdesk::services::{LocalProfileService, Profile};
use studentdesk::ui::core::{Action, BackgroundKind, TaskManager};

fn profile() -> Profile {
    Profile {
        name: "Student Name".to_string(),
        email: "student@email.com".to_string(),
        university: "University Name".to_string(),
    }
}

#[tokio::test]
async fn test_profile_update_reports_back() {
    let (mut manager, mut rx) = TaskManager::new();
    let service = Arc::new(LocalProfileService::new());

    let first = manager.spawn_profile_update(service.clone(), profile());
    assert_eq!(first, 1);
    assert_eq!(manager.task_count(), 1);

    match rx.recv().await {
        Some(Action::ProfileSaved(saved)) => assert_eq!(saved, profile()),
        other => panic!("expected ProfileSaved, got {:?}", other),
    }
    assert_eq!(service.saved_profile(), Some(profile()));
}

#[tokio::test]
async fn test_account_deletion_failure_is_an_action() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_account_deletion(Arc::new(LocalProfileService::new()));

    match rx.recv().await {
        Some(Action::ServiceFailed { kind, error }) => {
            assert_eq!(kind, BackgroundKind::AccountDeletion);
            assert_eq!(kind.label(), "Account deletion");
            assert!(error.contains("not available"));
        }
        other => panic!("expected ServiceFailed, got {:?}", other),
    }

    tokio::task::yield_now().await;
    while manager.is_running(BackgroundKind::AccountDeletion) {
        tokio::task::yield_now().await;
    }
    manager.cleanup_finished_tasks();
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, _rx) = TaskManager::new();
    manager.spawn_profile_update(Arc::new(LocalProfileService::new()), profile());
    manager.spawn_account_deletion(Arc::new(LocalProfileService::new()));
    assert_eq!(manager.task_count(), 2);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
    assert!(!manager.is_running(BackgroundKind::ProfileUpdate));
}
