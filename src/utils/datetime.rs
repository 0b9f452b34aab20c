//! Date and time utility functions
//!
//! This module provides functions for date parsing and human-readable formatting
//! of task due dates ("today", "tomorrow", "2 days overdue") and notification
//! timestamps ("5m ago").

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc, Weekday};

/// Standard date format used for due dates and configuration
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a due date relative to `today`
///
/// # Arguments
/// * `due` - The due date of a task
/// * `today` - The reference date, usually [`today()`]
///
/// # Returns
/// * `String` - "today", "tomorrow", "next Friday", "in 12 days",
///   "yesterday", "3 days overdue" or an absolute date for far-off dates
pub fn format_due_label(due: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (due - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(due.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-1).contains(&diff) => format!("{} days overdue", -diff),
        _ => {
            if due.year() == today.year() {
                due.format("%b %d").to_string()
            } else {
                due.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Format a timestamp as a short relative age ("just now", "5m ago", "2h ago", "3d ago")
pub fn format_relative_age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
