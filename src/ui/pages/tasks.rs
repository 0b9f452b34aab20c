use crate::contexts::{Priority, Task};
use crate::icons::IconService;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::styles::Palette;
use crate::utils::datetime;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

pub struct TasksPage {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub today: NaiveDate,
    pub icons: IconService,
}

impl TasksPage {
    pub fn new(icons: IconService) -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            today: datetime::today(),
            icons,
        }
    }

    /// Replace the list, keeping the selection on the same task when it
    /// survives a re-sort.
    pub fn update_data(&mut self, tasks: Vec<Task>, today: NaiveDate) {
        let selected_id = self.selected_task().map(|task| task.id);
        self.tasks = tasks;
        self.today = today;
        if let Some(index) = selected_id.and_then(|id| self.tasks.iter().position(|task| task.id == id)) {
            self.selected_index = index;
        }
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn select_next(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.tasks.len();
            self.update_list_state();
        }
    }

    fn select_previous(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = (self.selected_index + self.tasks.len() - 1) % self.tasks.len();
            self.update_list_state();
        }
    }

    fn create_task_item(&self, task: &Task, palette: &Palette) -> ListItem<'static> {
        let (marker, title_style) = if task.completed {
            (
                self.icons.task_completed(),
                Style::default().fg(palette.muted).add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            (self.icons.task_pending(), Style::default().fg(palette.text))
        };

        let priority_color = match task.priority {
            Priority::High => palette.danger,
            Priority::Medium => palette.warning,
            Priority::Low => palette.success,
        };

        let mut spans = vec![
            Span::styled(format!("{} ", marker), Style::default().fg(palette.primary)),
            Span::styled(task.title.clone(), title_style),
            Span::styled(format!("  [{}]", task.priority.label()), Style::default().fg(priority_color)),
        ];

        if let Some(course) = &task.course {
            spans.push(Span::styled(format!("  {}", course), Style::default().fg(palette.accent)));
        }

        if let Some(due) = task.due {
            let due_style = if task.is_overdue(self.today) {
                Style::default().fg(palette.danger).add_modifier(Modifier::BOLD)
            } else {
                palette.muted_text()
            };
            spans.push(Span::styled(
                format!("  {}", datetime::format_due_label(due, self.today)),
                due_style,
            ));
        }

        ListItem::new(Line::from(spans))
    }
}

impl Component for TasksPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TaskCreation),
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected_task() {
                Some(task) => Action::ToggleTask(task.id),
                None => Action::None,
            },
            KeyCode::Char('p') => match self.selected_task() {
                Some(task) => Action::CyclePriority(task.id),
                None => Action::None,
            },
            KeyCode::Char('e') => match self.selected_task() {
                Some(task) => Action::ShowDialog(DialogType::TaskEdit {
                    task_id: task.id,
                    input: task.to_quick_add(),
                }),
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected_task() {
                Some(task) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    item_type: "task".to_string(),
                    item_id: task.id,
                    label: task.title.clone(),
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let open = self.tasks.iter().filter(|t| !t.completed).count();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface).fg(palette.text))
            .title(Line::from(format!(" Tasks ({} open) ", open)))
            .title_style(palette.heading());

        if self.tasks.is_empty() {
            let empty = List::new(vec![ListItem::new(Span::styled(
                "No tasks yet. Press 'a' to create one.",
                palette.muted_text(),
            ))])
            .block(block);
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .map(|task| self.create_task_item(task, palette))
            .collect();

        let list = List::new(items).block(block).highlight_style(palette.focused());
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
