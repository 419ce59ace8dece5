use crate::domain::task::Priority;
use crate::domain::tone::{initials, Tone};
use crate::error::{AppError, Result};
use chrono::{Datelike, Months, NaiveDate};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A task pinned to a day of the displayed month.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTask {
    pub id: u32,
    pub title: String,
    pub date: u32, // Day of month
    pub color: Tone,
    pub assignee: String,
}

/// A task waiting in the sidebar to be dropped onto the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct UnscheduledTask {
    pub id: u32,
    pub title: String,
    pub priority: Priority,
    pub assignee: String,
    pub estimate: String,
}

impl UnscheduledTask {
    pub fn priority_label(&self) -> String {
        self.priority.label().to_uppercase()
    }

    pub fn assignee_initials(&self) -> String {
        initials(&self.assignee)
    }
}

/// One slot of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the 1st so it lands under its weekday.
    Blank,
    Day(u32),
}

/// A calendar month laid out on a Sunday-first grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(AppError::InvalidMonth { year, month })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => next.pred_opt().map_or(31, |last| last.day()),
            // Only reachable at the very end of chrono's date range
            None => 31,
        }
    }

    /// Blank cells before the 1st (0 when the month starts on a Sunday).
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Header text, e.g. "October 2023".
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn contains(&self, day: u32) -> bool {
        (1..=self.days_in_month()).contains(&day)
    }

    pub fn cells(&self) -> Vec<CalendarCell> {
        let blanks = (0..self.leading_blanks()).map(|_| CalendarCell::Blank);
        let days = (1..=self.days_in_month()).map(CalendarCell::Day);
        blanks.chain(days).collect()
    }
}

/// Tasks scheduled on exactly `day`, in fixture order.
pub fn tasks_for_day(tasks: &[CalendarTask], day: u32) -> Vec<&CalendarTask> {
    tasks.iter().filter(|task| task.date == day).collect()
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Long English date without the year: "Monday, October 23rd".
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}{}",
        date.format("%A, %B %-d"),
        ordinal_suffix(date.day())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_on(id: u32, date: u32) -> CalendarTask {
        CalendarTask {
            id,
            title: format!("Task {}", id),
            date,
            color: Tone::Info,
            assignee: "AB".to_string(),
        }
    }

    #[test]
    fn test_october_2023_geometry() {
        let month = CalendarMonth::new(2023, 10).unwrap();
        assert_eq!(month.days_in_month(), 31);
        assert_eq!(month.leading_blanks(), 0);
        assert_eq!(month.title(), "October 2023");
        assert_eq!(month.cells().len(), 31);
        assert_eq!(month.cells()[0], CalendarCell::Day(1));
    }

    #[test]
    fn test_month_with_leading_blanks() {
        // November 2023 starts on a Wednesday
        let month = CalendarMonth::new(2023, 11).unwrap();
        assert_eq!(month.leading_blanks(), 3);
        assert_eq!(month.days_in_month(), 30);

        let cells = month.cells();
        assert_eq!(cells.len(), 33);
        assert!(cells[..3].iter().all(|c| *c == CalendarCell::Blank));
        assert_eq!(cells[3], CalendarCell::Day(1));
        assert_eq!(cells[32], CalendarCell::Day(30));
    }

    #[test]
    fn test_leap_february() {
        assert_eq!(CalendarMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2023, 2).unwrap().days_in_month(), 28);
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let month = CalendarMonth::new(2023, 12).unwrap();
        assert_eq!(month.days_in_month(), 31);
        assert_eq!(month.year(), 2023);
        assert_eq!(month.month(), 12);
    }

    #[test]
    fn test_days_in_every_month() {
        let lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, expected) in (1..=12).zip(lengths) {
            assert_eq!(CalendarMonth::new(2025, month).unwrap().days_in_month(), expected, "month {month}");
        }
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert!(matches!(
            CalendarMonth::new(2023, 13),
            Err(AppError::InvalidMonth { year: 2023, month: 13 })
        ));
        assert!(CalendarMonth::new(2023, 0).is_err());
    }

    #[test]
    fn test_contains() {
        let month = CalendarMonth::new(2023, 9).unwrap();
        assert!(month.contains(1));
        assert!(month.contains(30));
        assert!(!month.contains(31));
        assert!(!month.contains(0));
    }

    #[test]
    fn test_tasks_for_day_has_no_bleed() {
        let tasks = vec![task_on(1, 4), task_on(2, 5), task_on(3, 5), task_on(4, 6)];

        let fifth: Vec<u32> = tasks_for_day(&tasks, 5).iter().map(|t| t.id).collect();
        assert_eq!(fifth, vec![2, 3]);
        assert_eq!(tasks_for_day(&tasks, 4).len(), 1);
        assert_eq!(tasks_for_day(&tasks, 6).len(), 1);
        assert!(tasks_for_day(&tasks, 7).is_empty());
    }

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 23).unwrap();
        assert_eq!(format_long_date(date), "Monday, October 23rd");

        let date = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
        assert_eq!(format_long_date(date), "Sunday, October 1st");

        let date = NaiveDate::from_ymd_opt(2023, 10, 12).unwrap();
        assert_eq!(format_long_date(date), "Thursday, October 12th");

        let date = NaiveDate::from_ymd_opt(2023, 10, 22).unwrap();
        assert_eq!(format_long_date(date), "Sunday, October 22nd");
    }

    #[test]
    fn test_unscheduled_task_labels() {
        let task = UnscheduledTask {
            id: 1,
            title: "Asset Cleanup".to_string(),
            priority: Priority::Medium,
            assignee: "Sarah K.".to_string(),
            estimate: "4h".to_string(),
        };
        assert_eq!(task.priority_label(), "MEDIUM");
        assert_eq!(task.assignee_initials(), "SK");
    }
}
