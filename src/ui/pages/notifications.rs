use crate::contexts::{Notification, NotificationKind};
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::ui::styles::Palette;
use crate::utils::datetime;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

pub struct NotificationsPage {
    pub notifications: Vec<Notification>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub now: DateTime<Utc>,
    pub icons: IconService,
}

impl NotificationsPage {
    pub fn new(icons: IconService) -> Self {
        Self {
            notifications: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            now: Utc::now(),
            icons,
        }
    }

    pub fn update_data(&mut self, notifications: Vec<Notification>, now: DateTime<Utc>) {
        self.notifications = notifications;
        self.now = now;
        if self.notifications.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.notifications.len() {
                self.selected_index = self.notifications.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_notification(&self) -> Option<&Notification> {
        self.notifications.get(self.selected_index)
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.notifications.len();
        if len == 0 {
            return;
        }
        self.selected_index = if forward {
            (self.selected_index + 1) % len
        } else {
            (self.selected_index + len - 1) % len
        };
        self.list_state.select(Some(self.selected_index));
    }

    fn create_item(&self, notification: &Notification, palette: &Palette) -> ListItem<'static> {
        let kind_color = match notification.kind {
            NotificationKind::Info => palette.primary,
            NotificationKind::Reminder => palette.accent,
            NotificationKind::Deadline => palette.danger,
            NotificationKind::Success => palette.success,
        };
        let marker = if notification.read { " " } else { self.icons.unread_marker() };
        let title_style = if notification.read {
            Style::default().fg(palette.muted)
        } else {
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
        };

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(kind_color)),
                Span::styled(notification.title.clone(), title_style),
                Span::styled(
                    format!("  {}", datetime::format_relative_age(notification.created_at, self.now)),
                    palette.muted_text(),
                ),
            ]),
            Line::from(Span::styled(format!("   {}", notification.message), palette.muted_text())),
        ])
    }
}

impl Component for NotificationsPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Enter => match self.selected_notification() {
                Some(n) if !n.read => Action::MarkNotificationRead(n.id),
                _ => Action::None,
            },
            KeyCode::Char('m') => Action::MarkAllNotificationsRead,
            KeyCode::Char('d') => match self.selected_notification() {
                Some(n) => Action::DismissNotification(n.id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let unread = self.notifications.iter().filter(|n| !n.read).count();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface).fg(palette.text))
            .title(Line::from(format!(" Notifications ({} unread) ", unread)))
            .title_style(palette.heading());

        if self.notifications.is_empty() {
            let empty =
                List::new(vec![ListItem::new(Span::styled("You're all caught up.", palette.muted_text()))]).block(block);
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = self
            .notifications
            .iter()
            .map(|n| self.create_item(n, palette))
            .collect();
        let list = List::new(items).block(block).highlight_style(palette.focused());
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
