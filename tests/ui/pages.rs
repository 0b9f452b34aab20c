use crate::helpers::{buffer_text, ch, key, terminal};
use chrono::{Duration, NaiveDate, Utc};
use crossterm::event::KeyCode;
use studentdesk::contexts::{sample, NotificationContext, TaskContext, TaskStats};
use studentdesk::icons::{IconService, IconTheme};
use studentdesk::ui::core::{Action, Component, DialogType};
use studentdesk::ui::pages::{DashboardPage, NotificationsPage, TasksPage};
use studentdesk::ui::styles::Palette;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn icons() -> IconService {
    IconService::new(IconTheme::Ascii)
}

#[test]
fn test_dashboard_shortcuts() {
    let mut page = DashboardPage::new(icons());
    assert!(matches!(page.handle_key_events(ch('t')), Action::Navigate(path) if path == "/tasks"));
    assert!(matches!(page.handle_key_events(ch('n')), Action::Navigate(path) if path == "/notifications"));
    assert!(matches!(page.handle_key_events(ch('x')), Action::None));
}

#[test]
fn test_dashboard_renders_stats_and_upcoming() {
    let context = TaskContext::new(sample::sample_tasks(today()));
    let mut page = DashboardPage::new(icons());
    page.update_data(
        "Ada",
        context.stats(today()),
        2,
        context.upcoming(today(), 5),
        today(),
    );

    let mut terminal = terminal(100, 24);
    terminal
        .draw(|f| {
            let area = f.area();
            page.render(f, area, &Palette::light())
        })
        .unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Welcome back, Ada!"));
    assert!(text.contains("Overdue"));
    assert!(text.contains("Linear algebra problem set 4"));
    assert!(text.contains("today"));
    // Overdue and undated tasks are not upcoming
    assert!(!text.contains("Lab report draft"));
}

#[test]
fn test_dashboard_empty_state() {
    let mut page = DashboardPage::new(icons());
    page.update_data("Ada", TaskStats::default(), 0, Vec::new(), today());
    let mut terminal = terminal(80, 20);
    terminal
        .draw(|f| {
            let area = f.area();
            page.render(f, area, &Palette::dark())
        })
        .unwrap();
    assert!(buffer_text(&terminal).contains("Nothing due"));
}

#[test]
fn test_tasks_page_without_tasks() {
    let mut page = TasksPage::new(icons());
    page.update_data(Vec::new(), today());
    assert!(matches!(page.handle_key_events(ch('e')), Action::None));
    assert!(matches!(page.handle_key_events(ch('d')), Action::None));
    assert!(matches!(
        page.handle_key_events(ch('a')),
        Action::ShowDialog(DialogType::TaskCreation)
    ));
}

#[test]
fn test_tasks_page_selection_wraps() {
    let context = TaskContext::new(sample::sample_tasks(today()));
    let tasks = context.tasks();
    let mut page = TasksPage::new(icons());
    page.update_data(tasks.clone(), today());

    page.handle_key_events(key(KeyCode::Up));
    assert_eq!(page.selected_task().map(|t| t.id), tasks.last().map(|t| t.id));
    page.handle_key_events(ch('j'));
    assert_eq!(page.selected_task().map(|t| t.id), Some(tasks[0].id));

    page.handle_key_events(ch('j'));
    let second = tasks[1].clone();
    assert!(matches!(page.handle_key_events(ch('p')), Action::CyclePriority(id) if id == second.id));
    match page.handle_key_events(ch('e')) {
        Action::ShowDialog(DialogType::TaskEdit { task_id, input }) => {
            assert_eq!(task_id, second.id);
            assert_eq!(input, second.to_quick_add());
            assert!(input.starts_with(&second.title));
        }
        other => panic!("expected edit dialog, got {:?}", other),
    }
}

#[test]
fn test_tasks_page_clamps_selection_after_removal() {
    let context = TaskContext::new(sample::sample_tasks(today()));
    let mut page = TasksPage::new(icons());
    page.update_data(context.tasks(), today());
    for _ in 0..5 {
        page.handle_key_events(ch('j'));
    }
    assert_eq!(page.selected_index, 5);

    let mut fewer = context.tasks();
    fewer.truncate(2);
    page.update_data(fewer, today());
    assert_eq!(page.selected_index, 1);
}

#[test]
fn test_tasks_page_renders_due_labels() {
    let context = TaskContext::new(sample::sample_tasks(today()));
    let mut page = TasksPage::new(icons());
    page.update_data(context.tasks(), today());

    let mut terminal = terminal(110, 12);
    terminal
        .draw(|f| {
            let area = f.area();
            page.render(f, area, &Palette::light())
        })
        .unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Tasks (5 open)"));
    assert!(text.contains("2 days overdue"));
    assert!(text.contains("[X] Submit course registration"));
}

#[test]
fn test_notifications_page_keys() {
    let context = NotificationContext::new(sample::sample_notifications());
    let notifications = context.notifications();
    let mut page = NotificationsPage::new(icons());
    page.update_data(notifications.clone(), Utc::now());

    assert!(matches!(
        page.handle_key_events(key(KeyCode::Enter)),
        Action::MarkNotificationRead(id) if id == notifications[0].id
    ));

    // The welcome message is already read
    page.handle_key_events(ch('k'));
    assert!(matches!(page.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(matches!(
        page.handle_key_events(ch('d')),
        Action::DismissNotification(id) if id == notifications[2].id
    ));
    assert!(matches!(page.handle_key_events(ch('m')), Action::MarkAllNotificationsRead));
}

#[test]
fn test_notifications_page_renders_ages() {
    let now = Utc::now();
    let context = NotificationContext::new(sample::sample_notifications());
    let mut page = NotificationsPage::new(icons());
    page.update_data(context.notifications(), now + Duration::seconds(1));

    let mut terminal = terminal(90, 12);
    terminal
        .draw(|f| {
            let area = f.area();
            page.render(f, area, &Palette::dark())
        })
        .unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Notifications (2 unread)"));
    assert!(text.contains("20m ago"));
    assert!(text.contains("3h ago"));
}
