//! Task context: the student's task list and the operations that change it.

use super::ContextError;
use crate::utils::datetime;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tokio::sync::watch;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Low -> Medium -> High -> Low
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Accepts the labels plus `med` and the digits 1 (high) to 3 (low)
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "high" | "1" => Some(Priority::High),
            "medium" | "med" | "2" => Some(Priority::Medium),
            "low" | "3" => Some(Priority::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub course: Option<String>,
    pub due: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due.is_some_and(|due| due < today)
    }

    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        !self.completed && self.due == Some(day)
    }

    /// The task written back as quick-add text, used to prefill the edit dialog
    pub fn to_quick_add(&self) -> String {
        let mut parts = vec![self.title.clone()];
        if let Some(course) = &self.course {
            parts.push(format!("#{}", course.replace(' ', "_")));
        }
        if let Some(due) = self.due {
            parts.push(format!("@{}", datetime::format_ymd(due)));
        }
        parts.push(format!("!{}", self.priority.label()));
        parts.join(" ")
    }
}

/// Input for [`TaskContext::add`]
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub course: Option<String>,
    pub due: Option<NaiveDate>,
    pub priority: Priority,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    pub fn due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Parse quick-add text such as `Essay draft #HIST_110 @tomorrow !high`.
    ///
    /// `#` sets the course (underscores become spaces), `@` the due date
    /// (`today`, `tomorrow` or `YYYY-MM-DD`) and `!` the priority. Words
    /// that do not parse as a marker stay in the title.
    pub fn parse(input: &str, today: NaiveDate) -> Self {
        let mut draft = TaskDraft::default();
        let mut title = Vec::new();

        for word in input.split_whitespace() {
            if let Some(course) = word.strip_prefix('#').filter(|course| !course.is_empty()) {
                draft = draft.course(course.replace('_', " "));
            } else if let Some(due) = word.strip_prefix('@').and_then(|value| parse_due(value, today)) {
                draft = draft.due(due);
            } else if let Some(priority) = word.strip_prefix('!').and_then(Priority::parse) {
                draft = draft.priority(priority);
            } else {
                title.push(word);
            }
        }

        draft.title = title.join(" ");
        draft
    }
}

fn parse_due(value: &str, today: NaiveDate) -> Option<NaiveDate> {
    match value.to_ascii_lowercase().as_str() {
        "today" => Some(today),
        "tomorrow" => today.succ_opt(),
        _ => datetime::parse_date(value).ok(),
    }
}

/// Partial update for [`TaskContext::update`]; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub course: Option<Option<String>>,
    pub due: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

/// A parsed draft replaces title, course, due date and priority
impl From<TaskDraft> for TaskUpdate {
    fn from(draft: TaskDraft) -> Self {
        Self {
            title: Some(draft.title),
            course: Some(draft.course.filter(|course| !course.trim().is_empty())),
            due: Some(draft.due),
            priority: Some(draft.priority),
            completed: None,
        }
    }
}

/// Counters shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub due_today: usize,
    pub overdue: usize,
}

pub struct TaskContext {
    state: watch::Sender<Vec<Task>>,
}

impl TaskContext {
    pub fn new(initial: Vec<Task>) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }

    /// Snapshot in display order: open tasks first, then by due date and priority
    pub fn tasks(&self) -> Vec<Task> {
        let mut tasks = self.state.borrow().clone();
        tasks.sort_by(display_order);
        tasks
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<Task> {
        self.state.borrow().iter().find(|task| task.id == id).cloned()
    }

    pub fn add(&self, draft: TaskDraft) -> Result<Task, ContextError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(ContextError::EmptyTitle);
        }

        let task = Task {
            id: Uuid::new_v4(),
            title,
            course: draft.course.filter(|course| !course.trim().is_empty()),
            due: draft.due,
            priority: draft.priority,
            completed: false,
            created_at: Utc::now(),
        };

        self.state.send_modify(|tasks| tasks.push(task.clone()));
        log::info!("Task added: '{}' ({})", task.title, task.id);
        Ok(task)
    }

    pub fn update(&self, id: Uuid, update: TaskUpdate) -> Result<Task, ContextError> {
        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(ContextError::EmptyTitle);
            }
        }

        self.modify(id, |task| {
            if let Some(title) = update.title {
                task.title = title.trim().to_string();
            }
            if let Some(course) = update.course {
                task.course = course;
            }
            if let Some(due) = update.due {
                task.due = due;
            }
            if let Some(priority) = update.priority {
                task.priority = priority;
            }
            if let Some(completed) = update.completed {
                task.completed = completed;
            }
        })
    }

    pub fn remove(&self, id: Uuid) -> Result<Task, ContextError> {
        let mut removed = None;
        self.state.send_if_modified(|tasks| match tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                removed = Some(tasks.remove(index));
                true
            }
            None => false,
        });

        let task = removed.ok_or(ContextError::TaskNotFound(id))?;
        log::info!("Task removed: '{}' ({})", task.title, task.id);
        Ok(task)
    }

    pub fn toggle_completed(&self, id: Uuid) -> Result<Task, ContextError> {
        self.modify(id, |task| task.completed = !task.completed)
    }

    pub fn cycle_priority(&self, id: Uuid) -> Result<Task, ContextError> {
        self.modify(id, |task| task.priority = task.priority.cycle())
    }

    pub fn stats(&self, today: NaiveDate) -> TaskStats {
        let tasks = self.state.borrow();
        let completed = tasks.iter().filter(|task| task.completed).count();
        TaskStats {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
            due_today: tasks.iter().filter(|task| task.is_due_on(today)).count(),
            overdue: tasks.iter().filter(|task| task.is_overdue(today)).count(),
        }
    }

    /// Open tasks due today or later, soonest first
    pub fn upcoming(&self, today: NaiveDate, limit: usize) -> Vec<Task> {
        self.tasks()
            .into_iter()
            .filter(|task| !task.completed && task.due.is_some_and(|due| due >= today))
            .take(limit)
            .collect()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Task>> {
        self.state.subscribe()
    }

    fn modify<F>(&self, id: Uuid, apply: F) -> Result<Task, ContextError>
    where
        F: FnOnce(&mut Task),
    {
        let mut updated = None;
        self.state.send_if_modified(|tasks| match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                apply(task);
                updated = Some(task.clone());
                true
            }
            None => false,
        });

        updated.ok_or(ContextError::TaskNotFound(id))
    }
}

impl Default for TaskContext {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn display_order(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| match (a.due, b.due) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| b.priority.cmp(&a.priority))
        .then_with(|| a.created_at.cmp(&b.created_at))
}
