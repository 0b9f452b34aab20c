//! Sample data seeded into the contexts when `ui.demo_data` is on.

use super::notifications::{Notification, NotificationKind};
use super::tasks::{Priority, Task};
use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

fn task(title: &str, course: &str, due: Option<NaiveDate>, priority: Priority, completed: bool) -> Task {
    Task {
        id: Uuid::new_v4(),
        title: title.to_string(),
        course: Some(course.to_string()),
        due,
        priority,
        completed,
        created_at: Utc::now(),
    }
}

pub fn sample_tasks(today: NaiveDate) -> Vec<Task> {
    vec![
        task("Linear algebra problem set 4", "MATH 221", Some(today), Priority::High, false),
        task("Read chapter 7: Thermodynamics", "PHYS 140", Some(today + Duration::days(1)), Priority::Medium, false),
        task("Lab report draft", "CHEM 110", Some(today - Duration::days(2)), Priority::High, false),
        task("Essay outline", "HIST 205", Some(today + Duration::days(6)), Priority::Low, false),
        task("Group project meeting notes", "CS 301", None, Priority::Medium, false),
        task("Submit course registration", "Admin", Some(today - Duration::days(5)), Priority::Medium, true),
    ]
}

pub fn sample_notifications() -> Vec<Notification> {
    let now = Utc::now();
    let mut deadline = Notification::new(
        NotificationKind::Deadline,
        "Deadline today",
        "Linear algebra problem set 4 is due today",
    );
    deadline.created_at = now - Duration::minutes(20);

    let mut reminder = Notification::new(
        NotificationKind::Reminder,
        "Study reminder",
        "You planned to read chapter 7 this evening",
    );
    reminder.created_at = now - Duration::hours(3);

    let mut welcome = Notification::new(NotificationKind::Info, "Welcome", "Your student dashboard is ready");
    welcome.created_at = now - Duration::days(1);
    welcome.read = true;

    vec![deadline, reminder, welcome]
}
