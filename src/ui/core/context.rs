use crate::{
    config::Config,
    contexts::{sample, NotificationContext, TaskContext, ThemeContext},
    icons::IconService,
    logger::Logger,
    utils::datetime,
};

/// The three application contexts plus shared services.
///
/// Construction order is Theme → Notification → Task; [`AppContext::shutdown`]
/// tears them down in reverse.
pub struct AppContext {
    pub theme: ThemeContext,
    pub notifications: NotificationContext,
    pub tasks: TaskContext,
    pub icons: IconService,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let theme = ThemeContext::new(config.appearance.theme);
        logger.log(format!("Context: theme initialised ({})", theme.theme()));

        let notifications = if config.ui.demo_data {
            NotificationContext::new(sample::sample_notifications())
        } else {
            NotificationContext::default()
        };
        logger.log(format!(
            "Context: notifications initialised ({} items)",
            notifications.len()
        ));

        let tasks = if config.ui.demo_data {
            TaskContext::new(sample::sample_tasks(datetime::today()))
        } else {
            TaskContext::default()
        };
        logger.log(format!("Context: tasks initialised ({} items)", tasks.len()));

        Self {
            theme,
            notifications,
            tasks,
            icons: IconService::new(config.appearance.icon_theme),
            logger,
        }
    }

    pub fn shutdown(self) {
        let AppContext {
            theme,
            notifications,
            tasks,
            logger,
            ..
        } = self;

        drop(tasks);
        logger.log("Context: tasks released".to_string());
        drop(notifications);
        logger.log("Context: notifications released".to_string());
        drop(theme);
        logger.log("Context: theme released".to_string());
    }
}
