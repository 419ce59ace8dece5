use crate::domain::tone::Tone;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: String, // Display label, e.g. "Oct 25, 2023" or "Overdue"
    pub assignees: Vec<String>, // Initials
    pub overdue: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    Review,
    Urgent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            category: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: String::new(),
            assignees: Vec::new(),
            overdue: false,
        }
    }
}

impl Task {
    pub fn is_assigned(&self) -> bool {
        !self.assignees.is_empty()
    }

    /// Tone of the due-date label; overdue tasks are flagged.
    pub fn due_tone(&self) -> Tone {
        if self.overdue {
            Tone::Danger
        } else {
            Tone::Neutral
        }
    }
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
            TaskStatus::Review => "Review",
            TaskStatus::Urgent => "Urgent",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            TaskStatus::InProgress => Tone::Primary,
            TaskStatus::Done => Tone::Success,
            TaskStatus::Review => Tone::Purple,
            TaskStatus::Todo | TaskStatus::Urgent => Tone::Neutral,
        }
    }
}

impl FromStr for TaskStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TO DO" | "TODO" => Ok(TaskStatus::Todo),
            "IN PROGRESS" => Ok(TaskStatus::InProgress),
            "DONE" => Ok(TaskStatus::Done),
            "REVIEW" => Ok(TaskStatus::Review),
            "URGENT" | "UR" => Ok(TaskStatus::Urgent),
            _ => Err(AppError::unknown_label("task status", s)),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Priority {
    /// Title-case label used in the dashboard table.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Compact uppercase label used in dense tables.
    pub fn short_label(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MED",
            Priority::High => "HIGH",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Priority::High => Tone::Danger,
            Priority::Medium => Tone::Warning,
            Priority::Low => Tone::Neutral,
        }
    }
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" | "MED" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            _ => Err(AppError::unknown_label("priority", s)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tone for a priority label as shown in the task tables.
///
/// Matches the exact spelling only; any other string is neutral.
pub fn priority_tone(label: &str) -> Tone {
    match label {
        "HIGH" => Priority::High.tone(),
        "MEDIUM" | "MED" => Priority::Medium.tone(),
        _ => Tone::Neutral,
    }
}

/// Tone for a task status label; exact match, anything else is neutral.
pub fn task_status_tone(label: &str) -> Tone {
    match label {
        "In Progress" => TaskStatus::InProgress.tone(),
        "Done" => TaskStatus::Done.tone(),
        "Review" => TaskStatus::Review.tone(),
        _ => Tone::Neutral,
    }
}

/// Headline numbers above the task table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStats {
    pub completed: u32,
    pub in_progress: u32,
    pub remaining: u32,
    pub total: u32,
    pub percentage: u8,
}

/// A card on the TaskMaster board.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTask {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub description: String,
    pub assignees: Vec<String>,
    pub due_label: String,
    pub completed: bool,
    pub highlighted: bool,
}

impl ActiveTask {
    pub fn due_tone(&self) -> Tone {
        if self.completed {
            Tone::Success
        } else {
            Tone::Neutral
        }
    }
}

/// Tone of a TaskMaster category chip.
pub fn category_tone(category: &str) -> Tone {
    match category {
        "DESIGN" => Tone::Purple,
        "DEV" => Tone::Primary,
        _ => Tone::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parsing() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("MED".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!(" low ".parse::<Priority>().unwrap(), Priority::Low);
        assert!("CRITICAL".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::Medium.label(), "Medium");
        assert_eq!(Priority::Medium.short_label(), "MED");
        assert_eq!(Priority::High.to_string(), "High");
    }

    #[test]
    fn test_task_status_parsing() {
        assert_eq!("To Do".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
        assert_eq!("in progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("UR".parse::<TaskStatus>().unwrap(), TaskStatus::Urgent);
        assert!("Blocked".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_task_status_tone() {
        assert_eq!(task_status_tone("In Progress"), Tone::Primary);
        assert_eq!(task_status_tone("Done"), Tone::Success);
        assert_eq!(task_status_tone("Review"), Tone::Purple);
        assert_eq!(task_status_tone("To Do"), Tone::Neutral);
        assert_eq!(task_status_tone("Urgent"), Tone::Neutral);
        assert_eq!(task_status_tone("???"), Tone::Neutral);
        assert_eq!(task_status_tone("done"), Tone::Neutral);
    }

    #[test]
    fn test_priority_tone_matches_exact_label_only() {
        assert_eq!(priority_tone("HIGH"), Tone::Danger);
        assert_eq!(priority_tone("MED"), Tone::Warning);
        assert_eq!(priority_tone("high"), Tone::Neutral);
        assert_eq!(priority_tone(" HIGH "), Tone::Neutral);
        assert_eq!(priority_tone("Med"), Tone::Neutral);
    }

    #[test]
    fn test_due_tone() {
        let mut task = Task::default();
        assert_eq!(task.due_tone(), Tone::Neutral);
        task.overdue = true;
        assert_eq!(task.due_tone(), Tone::Danger);
    }

    #[test]
    fn test_category_tone() {
        assert_eq!(category_tone("DESIGN"), Tone::Purple);
        assert_eq!(category_tone("DEV"), Tone::Primary);
        assert_eq!(category_tone("QA"), Tone::Success);
    }

    #[test]
    fn test_is_assigned() {
        let mut task = Task::default();
        assert!(!task.is_assigned());
        task.assignees.push("AB".to_string());
        assert!(task.is_assigned());
    }
}
