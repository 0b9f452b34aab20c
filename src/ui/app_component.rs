use crate::config::Config;
use crate::constants::{
    DASHBOARD_UPCOMING_LIMIT, ERROR_ACCOUNT_DELETE_FAILED, ERROR_NOTIFICATION_OPERATION_FAILED,
    ERROR_PROFILE_UPDATE_FAILED, ERROR_TASK_OPERATION_FAILED,
    STATUS_DELETING_ACCOUNT, STATUS_SAVING_PROFILE, SUCCESS_ACCOUNT_DELETED, SUCCESS_PROFILE_UPDATED,
    SUCCESS_TASK_COMPLETED, SUCCESS_TASK_CREATED, SUCCESS_TASK_DELETED, SUCCESS_TASK_UPDATED,
};
use crate::contexts::{ContextError, NotificationKind, TaskDraft, TaskUpdate};
use crate::logger::Logger;
use crate::router::{Page, Router, NAV_ITEMS};
use crate::services::profile::{Profile, ProfileService};
use crate::ui::components::{BottomNav, DialogComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::{BackgroundKind, TaskManager},
    AppContext, Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::pages::{DashboardPage, NotFoundPage, NotificationsPage, SettingsPage, TasksPage};
use crate::ui::styles::Palette;
use crate::utils::datetime;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{widgets::Block, Frame};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Shared state
    context: AppContext,
    router: Router,
    profile: Profile,

    // Component composition
    nav: BottomNav,
    dashboard: DashboardPage,
    tasks_page: TasksPage,
    notifications_page: NotificationsPage,
    settings: SettingsPage,
    not_found: NotFoundPage,
    dialog: DialogComponent,
    // Background results waiting for the open dialog to close
    pending_dialogs: VecDeque<DialogType>,

    // Services
    profile_service: Arc<dyn ProfileService>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    // Simple UI state
    show_status_bar: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger, profile_service: Arc<dyn ProfileService>) -> Self {
        let context = AppContext::new(config, logger.clone());
        let icons = context.icons.clone();
        let profile = config.profile.to_profile();
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut settings = SettingsPage::new(profile.clone(), icons.clone());
        settings.theme = context.theme.theme();

        let mut app = Self {
            router: Router::new(config.ui.default_route.clone()),
            profile,
            nav: BottomNav::new(icons.clone()),
            dashboard: DashboardPage::new(icons.clone()),
            tasks_page: TasksPage::new(icons.clone()),
            notifications_page: NotificationsPage::new(icons),
            settings,
            not_found: NotFoundPage::default(),
            dialog: DialogComponent::new(),
            pending_dialogs: VecDeque::new(),
            profile_service,
            task_manager,
            background_action_rx,
            logger,
            show_status_bar: config.ui.show_status_bar,
            should_quit: false,
            context,
        };
        app.logger
            .log(format!("AppComponent: Started on {}", app.router.current_path()));
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Last profile acknowledged by the profile service
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn settings(&self) -> &SettingsPage {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsPage {
        &mut self.settings
    }

    pub fn active_dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Status line text while a service call is in flight
    pub fn busy_message(&self) -> Option<&'static str> {
        if self.task_manager.is_running(BackgroundKind::ProfileUpdate) {
            Some(STATUS_SAVING_PROFILE)
        } else if self.task_manager.is_running(BackgroundKind::AccountDeletion) {
            Some(STATUS_DELETING_ACCOUNT)
        } else {
            None
        }
    }

    fn active_page(&mut self) -> &mut dyn Component {
        match self.router.current_page() {
            Page::Dashboard => &mut self.dashboard,
            Page::Tasks => &mut self.tasks_page,
            Page::Notifications => &mut self.notifications_page,
            Page::Settings => &mut self.settings,
            Page::NotFound => &mut self.not_found,
        }
    }

    /// Refresh every page from the contexts
    fn sync_component_data(&mut self) {
        let today = datetime::today();
        let stats = self.context.tasks.stats(today);
        let upcoming = self.context.tasks.upcoming(today, DASHBOARD_UPCOMING_LIMIT);
        let unread = self.context.notifications.unread_count();

        self.dashboard
            .update_data(&self.profile.name, stats, unread, upcoming, today);
        self.tasks_page.update_data(self.context.tasks.tasks(), today);
        self.notifications_page
            .update_data(self.context.notifications.notifications(), Utc::now());
        self.settings.theme = self.context.theme.theme();
        self.not_found.update_data(self.router.current_path());
    }

    fn apply_icon_theme(&mut self) {
        let icons = self.context.icons.clone();
        self.nav.icons = icons.clone();
        self.dashboard.icons = icons.clone();
        self.tasks_page.icons = icons.clone();
        self.notifications_page.icons = icons.clone();
        self.settings.icons = icons;
    }

    /// Route a key press: open dialog, then text fields, then global shortcuts, then the page
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger
                .log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        if self.active_page().captures_text_input() {
            return self.active_page().handle_key_events(key);
        }

        let action = self.handle_global_key(key);
        if !matches!(action, Action::None) {
            return action;
        }
        self.active_page().handle_key_events(key)
    }

    /// Handle global keyboard shortcuts that aren't page-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger
                    .log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('T') => Action::ToggleTheme,
            KeyCode::Char('I') => Action::CycleIconTheme,
            KeyCode::Char(c @ '1'..='4') => {
                let index = (c as usize) - ('1' as usize);
                Action::Navigate(NAV_ITEMS[index].path.to_string())
            }
            KeyCode::Right => Action::NextPage,
            KeyCode::Left => Action::PreviousPage,
            KeyCode::Char('b') => Action::NavigateBack,
            _ => Action::None,
        }
    }

    /// Run an action and whatever follow-up actions it produces, then refresh the pages
    pub fn dispatch(&mut self, action: Action) {
        let mut action = action;
        loop {
            if let Action::ShowDialog(DialogType::Logs) = &action {
                self.dialog.set_logs(self.logger.get_logs());
            }
            let remaining = self.dialog.update(action);
            action = self.apply(remaining);
            if matches!(action, Action::None) {
                if self.dialog.is_visible() {
                    break;
                }
                match self.pending_dialogs.pop_front() {
                    Some(dialog) => action = Action::ShowDialog(dialog),
                    None => break,
                }
            }
        }
        self.sync_component_data();
    }

    /// Show a background result now, or once the open dialog is closed
    fn show_result(&mut self, dialog: DialogType) -> Action {
        if self.dialog.is_visible() {
            self.pending_dialogs.push_back(dialog);
            Action::None
        } else {
            Action::ShowDialog(dialog)
        }
    }

    /// Handle app-level actions, returning a follow-up action
    fn apply(&mut self, action: Action) -> Action {
        match action {
            Action::None | Action::ShowDialog(_) | Action::HideDialog => Action::None,
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }

            Action::Navigate(path) => {
                if self.router.navigate(&path) {
                    self.logger
                        .log(format!("Navigation: {} -> {:?}", path, self.router.current_page()));
                }
                Action::None
            }
            Action::NextPage => {
                self.router.cycle(true);
                Action::None
            }
            Action::PreviousPage => {
                self.router.cycle(false);
                Action::None
            }
            Action::NavigateBack => {
                if !self.router.back() {
                    self.logger.log("Navigation: history is empty".to_string());
                }
                Action::None
            }

            Action::ToggleTheme => {
                self.context.theme.toggle();
                Action::None
            }
            Action::CycleIconTheme => {
                self.context.icons.cycle_icon_theme();
                self.apply_icon_theme();
                self.logger
                    .log(format!("Icons: theme set to {:?}", self.context.icons.theme()));
                Action::None
            }

            Action::CreateTask { input } => {
                let draft = TaskDraft::parse(&input, datetime::today());
                match self.context.tasks.add(draft) {
                    Ok(task) => {
                        self.logger
                            .log(format!("{}: '{}' ({})", SUCCESS_TASK_CREATED, task.title, task.id));
                        Action::None
                    }
                    Err(e) => self.task_failure(e),
                }
            }
            Action::EditTask { id, input } => {
                let update = TaskUpdate::from(TaskDraft::parse(&input, datetime::today()));
                match self.context.tasks.update(id, update) {
                    Ok(task) => {
                        self.logger
                            .log(format!("{}: '{}' ({})", SUCCESS_TASK_UPDATED, task.title, task.id));
                        Action::None
                    }
                    Err(e) => self.task_failure(e),
                }
            }
            Action::ToggleTask(id) => match self.context.tasks.toggle_completed(id) {
                Ok(task) => {
                    if task.completed {
                        self.logger
                            .log(format!("{}: '{}'", SUCCESS_TASK_COMPLETED, task.title));
                        self.context
                            .notifications
                            .push(NotificationKind::Success, "Task completed", task.title);
                    } else {
                        self.logger.log(format!("Task: '{}' reopened", task.title));
                    }
                    Action::None
                }
                Err(e) => self.task_failure(e),
            },
            Action::CyclePriority(id) => match self.context.tasks.cycle_priority(id) {
                Ok(task) => {
                    self.logger.log(format!(
                        "Task: '{}' priority set to {}",
                        task.title,
                        task.priority.label()
                    ));
                    Action::None
                }
                Err(e) => self.task_failure(e),
            },
            Action::DeleteTask(id) => match self.context.tasks.remove(id) {
                Ok(task) => {
                    self.logger
                        .log(format!("{}: '{}'", SUCCESS_TASK_DELETED, task.title));
                    Action::None
                }
                Err(e) => self.task_failure(e),
            },

            Action::MarkNotificationRead(id) => match self.context.notifications.mark_read(id) {
                Ok(()) => Action::None,
                Err(e) => self.notification_failure(e),
            },
            Action::MarkAllNotificationsRead => {
                let marked = self.context.notifications.mark_all_read();
                self.logger
                    .log(format!("Notifications: marked {} as read", marked));
                Action::None
            }
            Action::DismissNotification(id) => match self.context.notifications.dismiss(id) {
                Ok(notification) => {
                    self.logger
                        .log(format!("Notifications: dismissed '{}'", notification.title));
                    Action::None
                }
                Err(e) => self.notification_failure(e),
            },

            Action::SubmitProfile(profile) => {
                if self.task_manager.is_running(BackgroundKind::ProfileUpdate) {
                    self.logger
                        .log("Profile: update already in progress, ignoring".to_string());
                    return Action::None;
                }
                match serde_json::to_string(&profile) {
                    Ok(json) => self.logger.log(format!("Profile: submitting {}", json)),
                    Err(e) => self.logger.log(format!("Profile: submitting (unserializable: {})", e)),
                }
                self.settings.saving = true;
                self.task_manager
                    .spawn_profile_update(Arc::clone(&self.profile_service), profile);
                Action::None
            }
            Action::ProfileSaved(profile) => {
                self.logger
                    .log(format!("Profile: saved for '{}'", profile.name));
                self.settings.saving = false;
                self.profile = profile;
                self.show_result(DialogType::Info(SUCCESS_PROFILE_UPDATED.to_string()))
            }
            Action::DeleteAccount => {
                if self.task_manager.is_running(BackgroundKind::AccountDeletion) {
                    return Action::None;
                }
                self.logger.log("Account: deletion requested".to_string());
                self.task_manager
                    .spawn_account_deletion(Arc::clone(&self.profile_service));
                Action::None
            }
            Action::AccountDeleted => {
                self.logger.log("Account: deleted".to_string());
                self.show_result(DialogType::Info(SUCCESS_ACCOUNT_DELETED.to_string()))
            }
            Action::ServiceFailed { kind, error } => {
                self.logger
                    .log(format!("Service: {} failed: {}", kind.label(), error));
                let headline = match kind {
                    BackgroundKind::ProfileUpdate => {
                        self.settings.saving = false;
                        ERROR_PROFILE_UPDATE_FAILED
                    }
                    BackgroundKind::AccountDeletion => ERROR_ACCOUNT_DELETE_FAILED,
                };
                self.show_result(DialogType::Error(format!("{}: {}", headline, error)))
            }
        }
    }

    fn task_failure(&self, error: ContextError) -> Action {
        self.logger
            .log(format!("{}: {}", ERROR_TASK_OPERATION_FAILED, error));
        Action::ShowDialog(DialogType::Error(format!("{}: {}", ERROR_TASK_OPERATION_FAILED, error)))
    }

    fn notification_failure(&self, error: ContextError) -> Action {
        self.logger
            .log(format!("{}: {}", ERROR_NOTIFICATION_OPERATION_FAILED, error));
        Action::ShowDialog(DialogType::Error(format!(
            "{}: {}",
            ERROR_NOTIFICATION_OPERATION_FAILED, error
        )))
    }

    /// Drain results sent back by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            self.logger.log(format!(
                "Background: Cleaned up {} finished tasks",
                completed_tasks.len()
            ));
        }

        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        match event_type {
            EventType::Key(key) => {
                let action = self.handle_key(key);
                self.dispatch(action);
            }
            EventType::Tick => {
                for action in self.process_background_actions() {
                    self.dispatch(action);
                }
            }
            EventType::Resize(_, _) | EventType::Other => {}
        }
        Ok(())
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let palette = Palette::for_theme(self.context.theme.theme());
        f.render_widget(Block::default().style(palette.base()), area);

        let areas = LayoutManager::main_layout(area, self.show_status_bar);
        self.active_page().render(f, areas.page, &palette);
        self.nav
            .render(f, areas.nav, self.router.current_path(), &palette);

        if let Some(status_area) = areas.status {
            StatusBar::render(f, status_area, self.router.current_page(), self.busy_message(), &palette);
        }

        if self.dialog.is_visible() {
            self.dialog.render(f, area, &palette);
        }
    }

    /// Cancel background work and tear the contexts down
    pub fn shutdown(self) {
        let AppComponent {
            context,
            mut task_manager,
            logger,
            ..
        } = self;
        task_manager.cancel_all_tasks();
        logger.log("AppComponent: Shutting down".to_string());
        context.shutdown();
    }
}
