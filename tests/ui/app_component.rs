use crate::helpers::{buffer_text, ch, key, terminal};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use studentdesk::config::Config;
use studentdesk::constants::SUCCESS_PROFILE_UPDATED;
use studentdesk::contexts::{Priority, Theme};
use studentdesk::icons::IconTheme;
use studentdesk::logger::Logger;
use studentdesk::router::Page;
use studentdesk::services::{LocalProfileService, Profile, ProfileField, ProfileService, ServiceError};
use studentdesk::utils::datetime;
use studentdesk::ui::core::{Action, DialogType, EventType};
use studentdesk::ui::AppComponent;

fn config() -> Config {
    let mut config = Config::default();
    config.appearance.icon_theme = IconTheme::Ascii;
    config
}

fn app() -> AppComponent {
    AppComponent::new(&config(), Logger::new(), Arc::new(LocalProfileService::new()))
}

fn press(app: &mut AppComponent, event: KeyEvent) {
    app.handle_event(EventType::Key(event)).unwrap();
}

/// Profile service whose backend is unreachable
struct OfflineService;

#[async_trait]
impl ProfileService for OfflineService {
    async fn update_profile(&self, _profile: &Profile) -> Result<Profile, ServiceError> {
        Err(ServiceError::Network("server unreachable".to_string()))
    }

    async fn delete_account(&self) -> Result<(), ServiceError> {
        Err(ServiceError::Network("server unreachable".to_string()))
    }
}

/// Tick until background work has been applied or the attempts run out
async fn settle(app: &mut AppComponent) {
    for _ in 0..100 {
        app.handle_event(EventType::Tick).unwrap();
        if !app.is_busy() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    // A result sent just before the task finished is picked up here
    app.handle_event(EventType::Tick).unwrap();
}

/// Tick until a dialog opens or the attempts run out
async fn wait_for_dialog(app: &mut AppComponent) {
    for _ in 0..100 {
        app.handle_event(EventType::Tick).unwrap();
        if app.active_dialog().is_some() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[tokio::test]
async fn test_starts_on_default_route() {
    let mut config = config();
    config.ui.default_route = "/notifications".to_string();
    let app = AppComponent::new(&config, Logger::new(), Arc::new(LocalProfileService::new()));
    assert_eq!(app.router().current_page(), Page::Notifications);
}

#[tokio::test]
async fn test_number_and_arrow_navigation() {
    let mut app = app();
    assert_eq!(app.router().current_path(), "/dashboard");

    press(&mut app, ch('2'));
    assert_eq!(app.router().current_path(), "/tasks");
    press(&mut app, key(KeyCode::Right));
    assert_eq!(app.router().current_path(), "/notifications");
    press(&mut app, ch('b'));
    assert_eq!(app.router().current_path(), "/tasks");
    press(&mut app, key(KeyCode::Left));
    assert_eq!(app.router().current_path(), "/dashboard");
    press(&mut app, ch('4'));
    assert_eq!(app.router().current_page(), Page::Settings);
}

#[tokio::test]
async fn test_root_and_unknown_routes() {
    let mut app = app();
    app.dispatch(Action::Navigate("/grades".to_string()));
    assert_eq!(app.router().current_page(), Page::NotFound);

    let mut terminal = terminal(100, 30);
    terminal.draw(|f| app.render(f)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("404"));
    assert!(!text.contains('━'));

    app.dispatch(Action::Navigate("/".to_string()));
    assert_eq!(app.router().current_path(), "/dashboard");
}

#[tokio::test]
async fn test_theme_toggle_key() {
    let mut app = app();
    assert_eq!(app.context().theme.theme(), Theme::Light);
    press(&mut app, ch('T'));
    assert_eq!(app.context().theme.theme(), Theme::Dark);
    assert_eq!(app.settings().theme, Theme::Dark);
    press(&mut app, ch('T'));
    assert_eq!(app.context().theme.theme(), Theme::Light);
}

#[tokio::test]
async fn test_submit_profile_shows_success() {
    let mut app = app();
    app.settings_mut().edit_field(ProfileField::Name, "Ada Lovelace");
    let staged = app.settings().profile.clone();
    assert_eq!(app.profile().name, "Student Name");

    app.dispatch(Action::SubmitProfile(staged));
    assert!(app.is_busy());
    assert!(app.settings().saving);

    wait_for_dialog(&mut app).await;
    match app.active_dialog() {
        Some(DialogType::Info(message)) => assert_eq!(message, SUCCESS_PROFILE_UPDATED),
        other => panic!("expected success dialog, got {:?}", other),
    }
    assert_eq!(app.profile().name, "Ada Lovelace");
    assert!(!app.settings().saving);

    press(&mut app, key(KeyCode::Enter));
    assert!(app.active_dialog().is_none());
}

#[tokio::test]
async fn test_failed_profile_update_surfaces_error() {
    let mut app = AppComponent::new(&config(), Logger::new(), Arc::new(OfflineService));
    app.settings_mut().edit_field(ProfileField::Email, "ada@example.com");
    let staged = app.settings().profile.clone();

    app.dispatch(Action::SubmitProfile(staged));
    assert!(app.settings().saving);
    wait_for_dialog(&mut app).await;

    match app.active_dialog() {
        Some(DialogType::Error(message)) => {
            assert!(message.contains("Failed to update profile"));
            assert!(message.contains("server unreachable"));
        }
        other => panic!("expected error dialog, got {:?}", other),
    }
    assert!(!app.settings().saving);
    assert_eq!(app.profile().email, "student@email.com");
    // Staged edits survive the failure so the user can retry
    assert_eq!(app.settings().profile.email, "ada@example.com");
}

#[tokio::test]
async fn test_background_result_waits_for_open_dialog() {
    let mut app = app();
    let staged = app.settings().profile.clone();
    app.dispatch(Action::SubmitProfile(staged));

    press(&mut app, ch('2'));
    press(&mut app, ch('a'));
    for c in "Essay".chars() {
        press(&mut app, ch(c));
    }
    settle(&mut app).await;

    assert!(!app.settings().saving);
    assert!(matches!(app.active_dialog(), Some(DialogType::TaskCreation)));

    press(&mut app, key(KeyCode::Enter));
    assert!(app.context().tasks.tasks().iter().any(|t| t.title == "Essay"));
    match app.active_dialog() {
        Some(DialogType::Info(message)) => assert_eq!(message, SUCCESS_PROFILE_UPDATED),
        other => panic!("expected queued success dialog, got {:?}", other),
    }

    press(&mut app, key(KeyCode::Enter));
    assert!(app.active_dialog().is_none());
}

#[tokio::test]
async fn test_delete_account_surfaces_error() {
    let mut app = app();
    app.dispatch(Action::DeleteAccount);
    wait_for_dialog(&mut app).await;

    match app.active_dialog() {
        Some(DialogType::Error(message)) => {
            assert!(message.contains("Failed to delete account"));
            assert!(message.contains("Not supported"));
        }
        other => panic!("expected error dialog, got {:?}", other),
    }
}

#[tokio::test]
async fn test_settings_field_captures_global_keys() {
    let mut app = app();
    press(&mut app, ch('4'));
    press(&mut app, key(KeyCode::Up)); // into the University field
    press(&mut app, ch('q'));
    press(&mut app, ch('1'));

    assert!(!app.should_quit());
    assert_eq!(app.router().current_page(), Page::Settings);
    assert_eq!(app.settings().profile.university, "University Nameq1");

    press(&mut app, key(KeyCode::Esc));
    press(&mut app, ch('1'));
    assert_eq!(app.router().current_page(), Page::Dashboard);
}

#[tokio::test]
async fn test_create_task_through_dialog() {
    let mut app = app();
    let before = app.context().tasks.len();
    press(&mut app, ch('2'));
    press(&mut app, ch('a'));
    assert!(matches!(app.active_dialog(), Some(DialogType::TaskCreation)));

    for c in "Quiz prep".chars() {
        press(&mut app, ch(c));
    }
    press(&mut app, key(KeyCode::Enter));

    assert!(app.active_dialog().is_none());
    assert_eq!(app.context().tasks.len(), before + 1);
    assert!(app.context().tasks.tasks().iter().any(|t| t.title == "Quiz prep"));
}

#[tokio::test]
async fn test_quick_add_sets_course_due_and_priority() {
    let mut app = app();
    press(&mut app, ch('2'));
    press(&mut app, ch('a'));
    for c in "Midterm review #MATH_221 @tomorrow !high".chars() {
        press(&mut app, ch(c));
    }
    press(&mut app, key(KeyCode::Enter));

    let task = app
        .context()
        .tasks
        .tasks()
        .into_iter()
        .find(|t| t.title == "Midterm review")
        .unwrap();
    assert_eq!(task.course.as_deref(), Some("MATH 221"));
    assert_eq!(task.due, datetime::today().succ_opt());
    assert_eq!(task.priority, Priority::High);
}

#[tokio::test]
async fn test_delete_task_with_confirmation() {
    let mut app = app();
    let before = app.context().tasks.len();
    press(&mut app, ch('2'));

    press(&mut app, ch('d'));
    press(&mut app, ch('n'));
    assert_eq!(app.context().tasks.len(), before);

    press(&mut app, ch('d'));
    assert!(matches!(app.active_dialog(), Some(DialogType::DeleteConfirmation { .. })));
    press(&mut app, ch('y'));
    assert_eq!(app.context().tasks.len(), before - 1);
}

#[tokio::test]
async fn test_completing_a_task_adds_notification() {
    let mut app = app();
    let unread = app.context().notifications.unread_count();
    press(&mut app, ch('2'));
    press(&mut app, ch(' '));

    assert_eq!(app.context().notifications.unread_count(), unread + 1);
    assert_eq!(app.context().tasks.stats(studentdesk::utils::datetime::today()).completed, 2);
}

#[tokio::test]
async fn test_toggling_twice_restores_the_same_task() {
    let mut app = app();
    let before = app.context().tasks.tasks();
    press(&mut app, ch('2'));

    // Completing the first task moves it to the bottom of the list
    press(&mut app, ch(' '));
    press(&mut app, ch(' '));

    assert_eq!(app.context().tasks.tasks(), before);
}

#[tokio::test]
async fn test_notification_keys() {
    let mut app = app();
    press(&mut app, ch('3'));
    press(&mut app, key(KeyCode::Enter));
    assert_eq!(app.context().notifications.unread_count(), 1);
    press(&mut app, ch('m'));
    assert_eq!(app.context().notifications.unread_count(), 0);
    press(&mut app, ch('d'));
    assert_eq!(app.context().notifications.len(), 2);
}

#[tokio::test]
async fn test_help_and_logs_dialogs() {
    let mut app = app();
    press(&mut app, ch('?'));
    assert!(matches!(app.active_dialog(), Some(DialogType::Help)));
    press(&mut app, key(KeyCode::Esc));
    assert!(app.active_dialog().is_none());

    press(&mut app, ch('G'));
    assert!(matches!(app.active_dialog(), Some(DialogType::Logs)));
    let mut terminal = terminal(100, 40);
    terminal.draw(|f| app.render(f)).unwrap();
    assert!(buffer_text(&terminal).contains("Context: tasks initialised"));
    press(&mut app, ch('G'));
    assert!(app.active_dialog().is_none());
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());

    let mut app = self::app();
    press(&mut app, ch('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_every_page_renders() {
    let mut app = app();
    let mut terminal = terminal(100, 40);
    for (key_char, expected) in [('1', "Welcome back"), ('2', "Tasks ("), ('3', "Notifications ("), ('4', "Settings")] {
        press(&mut app, ch(key_char));
        terminal.draw(|f| app.render(f)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains(expected), "page {} missing '{}'", key_char, expected);

        // Navigation sits above the one-line status bar
        let nav_rows: String = text.lines().skip(36).take(3).collect();
        assert_eq!(nav_rows.matches('━').count(), 3);
    }
}

#[tokio::test]
async fn test_shutdown_releases_contexts_in_reverse_order() {
    let logger = Logger::new();
    let app = AppComponent::new(&config(), logger.clone(), Arc::new(LocalProfileService::new()));
    app.shutdown();

    // Newest first
    let logs = logger.get_logs();
    let position = |needle: &str| logs.iter().position(|line| line.contains(needle)).unwrap();
    assert!(position("Context: theme released") < position("Context: notifications released"));
    assert!(position("Context: notifications released") < position("Context: tasks released"));
    assert!(position("Context: tasks initialised") < position("Context: notifications initialised"));
    assert!(position("Context: notifications initialised") < position("Context: theme initialised"));
}
