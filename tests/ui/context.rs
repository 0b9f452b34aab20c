use studentdesk::config::Config;
use studentdesk::contexts::Theme;
use studentdesk::icons::IconTheme;
use studentdesk::logger::Logger;
use studentdesk::ui::core::AppContext;

#[test]
fn test_context_follows_config() {
    let mut config = Config::default();
    config.appearance.theme = Theme::Dark;
    config.appearance.icon_theme = IconTheme::Emoji;

    let context = AppContext::new(&config, Logger::new());
    assert_eq!(context.theme.theme(), Theme::Dark);
    assert_eq!(context.icons.theme(), IconTheme::Emoji);
    assert_eq!(context.tasks.len(), 6);
    assert_eq!(context.notifications.len(), 3);
}

#[test]
fn test_context_without_demo_data_is_empty() {
    let mut config = Config::default();
    config.ui.demo_data = false;

    let context = AppContext::new(&config, Logger::new());
    assert!(context.tasks.is_empty());
    assert!(context.notifications.is_empty());
    assert_eq!(context.theme.theme(), Theme::Light);
}

#[test]
fn test_construction_order_is_logged() {
    let logger = Logger::new();
    let context = AppContext::new(&Config::default(), logger.clone());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[2].contains("theme initialised"));
    assert!(logs[1].contains("notifications initialised"));
    assert!(logs[0].contains("tasks initialised"));

    context.shutdown();
    let logs = logger.get_logs();
    assert!(logs[0].contains("theme released"));
    assert!(logs[2].contains("tasks released"));
}
