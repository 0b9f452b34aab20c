//! Dashboard: greeting, task statistics and the next few deadlines.

use crate::constants::{DASHBOARD_UPCOMING_LIMIT, ROUTE_NOTIFICATIONS, ROUTE_TASKS};
use crate::contexts::{Task, TaskStats};
use crate::icons::{Icon, IconService, IconSize};
use crate::ui::components::card::Card;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::styles::Palette;
use crate::utils::datetime;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct DashboardPage {
    pub student_name: String,
    pub stats: TaskStats,
    pub unread_notifications: usize,
    pub upcoming: Vec<Task>,
    pub today: NaiveDate,
    pub icons: IconService,
}

impl DashboardPage {
    pub fn new(icons: IconService) -> Self {
        Self {
            student_name: String::new(),
            stats: TaskStats::default(),
            unread_notifications: 0,
            upcoming: Vec::new(),
            today: datetime::today(),
            icons,
        }
    }

    pub fn update_data(
        &mut self,
        student_name: &str,
        stats: TaskStats,
        unread_notifications: usize,
        upcoming: Vec<Task>,
        today: NaiveDate,
    ) {
        self.student_name = student_name.to_string();
        self.stats = stats;
        self.unread_notifications = unread_notifications;
        self.upcoming = upcoming;
        self.today = today;
    }

    /// Label, value and accent color of every stat card
    pub fn stat_cards(&self, palette: &Palette) -> [(&'static str, usize, Color); 6] {
        [
            ("Total", self.stats.total, palette.primary),
            ("Completed", self.stats.completed, palette.success),
            ("Pending", self.stats.pending, palette.accent),
            ("Due Today", self.stats.due_today, palette.warning),
            ("Overdue", self.stats.overdue, palette.danger),
            ("Unread", self.unread_notifications, palette.primary),
        ]
    }

    fn render_stats(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let cards = self.stat_cards(palette);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
            .split(area);

        for ((label, value, color), column) in cards.iter().zip(columns.iter()) {
            let inner = Card::new().render(f, *column, palette);
            let text = vec![
                Line::from(Span::styled(
                    value.to_string(),
                    Style::default().fg(*color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*label, palette.muted_text())),
            ];
            f.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
        }
    }

    fn render_upcoming(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let card = Card::new().title(vec![
            self.icons.render(Icon::Tasks, IconSize::Medium, palette.heading()),
            Span::raw("Upcoming "),
        ]);
        let inner = card.render(f, area, palette);

        let lines: Vec<Line> = if self.upcoming.is_empty() {
            vec![Line::from(Span::styled("Nothing due. Enjoy the break!", palette.muted_text()))]
        } else {
            self.upcoming
                .iter()
                .map(|task| {
                    let due = task
                        .due
                        .map(|d| datetime::format_due_label(d, self.today))
                        .unwrap_or_default();
                    let course = task.course.as_deref().unwrap_or("");
                    Line::from(vec![
                        Span::styled(format!("{} ", self.icons.task_pending()), Style::default().fg(palette.primary)),
                        Span::styled(task.title.clone(), Style::default().fg(palette.text)),
                        Span::styled(format!("  {}", course), Style::default().fg(palette.accent)),
                        Span::styled(format!("  {}", due), palette.muted_text()),
                    ])
                })
                .collect()
        };
        f.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for DashboardPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('t') => Action::Navigate(ROUTE_TASKS.to_string()),
            KeyCode::Char('n') => Action::Navigate(ROUTE_NOTIFICATIONS.to_string()),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let area = LayoutManager::content_column(rect);
        let upcoming_height = (self.upcoming.len().max(1).min(DASHBOARD_UPCOMING_LIMIT) as u16) + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(upcoming_height),
                Constraint::Min(0),
            ])
            .split(area);

        let greeting = vec![
            Line::from(vec![
                self.icons.render(Icon::Dashboard, IconSize::Small, palette.heading()),
                Span::styled(format!("Welcome back, {}!", self.student_name), palette.heading()),
            ]),
            Line::from(Span::styled(
                format!("Today is {}", self.today.format("%A, %B %-d")),
                palette.muted_text(),
            )),
        ];
        f.render_widget(Paragraph::new(greeting), chunks[0]);

        self.render_stats(f, chunks[1], palette);
        self.render_upcoming(f, chunks[2], palette);
    }
}
