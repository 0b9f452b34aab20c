use chrono::{Duration, NaiveDate, TimeZone, Utc};
use studentdesk::utils::datetime::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_format_ymd_and_parse() {
    let date = day(2025, 1, 15);
    assert_eq!(format_ymd(date), "2025-01-15");
    assert_eq!(parse_date(" 2025-01-15 ").unwrap(), date);
    assert!(parse_date("15/01/2025").is_err());
}

#[test]
fn test_format_due_label_near_dates() {
    // 2025-01-15 is a Wednesday
    let today = day(2025, 1, 15);
    assert_eq!(format_due_label(today, today), "today");
    assert_eq!(format_due_label(day(2025, 1, 16), today), "tomorrow");
    assert_eq!(format_due_label(day(2025, 1, 14), today), "yesterday");
    assert_eq!(format_due_label(day(2025, 1, 17), today), "next Friday");
    assert_eq!(format_due_label(day(2025, 1, 22), today), "next Wednesday");
}

#[test]
fn test_format_due_label_far_dates() {
    let today = day(2025, 1, 15);
    assert_eq!(format_due_label(day(2025, 1, 25), today), "in 10 days");
    assert_eq!(format_due_label(day(2025, 1, 12), today), "3 days overdue");
    assert_eq!(format_due_label(day(2025, 6, 1), today), "Jun 01");
    assert_eq!(format_due_label(day(2026, 3, 2), today), "Mar 02, 2026");
}

#[test]
fn test_format_relative_age() {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    assert_eq!(format_relative_age(now, now), "just now");
    assert_eq!(format_relative_age(now - Duration::minutes(5), now), "5m ago");
    assert_eq!(format_relative_age(now - Duration::hours(3), now), "3h ago");
    assert_eq!(format_relative_age(now - Duration::days(2), now), "2d ago");
}
