// Data models for the task board

use chrono::NaiveDate;
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
}

impl Task {
    /// True when the due date is strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        match normalized.as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "inprogress" => Ok(TaskStatus::InProgress),
            "completed" | "done" => Ok(TaskStatus::Completed),
            _ => Err(eyre!("Unknown status: {} (expected pending, in-progress or completed)", s)),
        }
    }
}

/// Raw input of the "add task" form, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date: due_date.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate the draft and turn it into a Pending task with the given id
    ///
    /// An empty title or a missing due date is rejected, so the store never
    /// sees an invalid task.
    pub fn into_task(self, id: String) -> Result<Task> {
        if self.title.is_empty() {
            return Err(eyre!("Task title is required"));
        }
        if self.due_date.trim().is_empty() {
            return Err(eyre!("Task due date is required"));
        }
        let due_date = parse_due_date(&self.due_date)?;

        Ok(Task {
            id,
            title: self.title,
            description: self.description,
            status: TaskStatus::Pending,
            due_date,
        })
    }
}

/// Parse an ISO 8601 calendar date (YYYY-MM-DD)
pub fn parse_due_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid due date: {} (expected YYYY-MM-DD)", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let json = serde_json::to_string(&TaskStatus::Pending).unwrap();
        assert_eq!(json, "\"Pending\"");

        let status: TaskStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(status, TaskStatus::Completed);
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        let result: Result<TaskStatus, _> = serde_json::from_str("\"Blocked\"");
        assert!(result.is_err());
        assert!("blocked".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_status_from_str_variants() {
        assert_eq!("pending".parse::<TaskStatus>().unwrap(), TaskStatus::Pending);
        assert_eq!("In Progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("in-progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("in_progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("DONE".parse::<TaskStatus>().unwrap(), TaskStatus::Completed);
    }

    #[test]
    fn test_task_serialization() {
        let task = Task {
            id: "t-1".to_string(),
            title: "Buy milk".to_string(),
            description: String::new(),
            status: TaskStatus::InProgress,
            due_date: date("2024-01-01"),
        };

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"dueDate\":\"2024-01-01\""));
        assert!(json.contains("\"status\":\"In Progress\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_draft_into_task_defaults_to_pending() {
        let task = TaskDraft::new("Walk dog", "2024-01-02")
            .with_description("around the park")
            .into_task("id-7".to_string())
            .unwrap();

        assert_eq!(task.id, "id-7");
        assert_eq!(task.title, "Walk dog");
        assert_eq!(task.description, "around the park");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.due_date, date("2024-01-02"));
    }

    #[test]
    fn test_draft_requires_title_and_due_date() {
        assert!(TaskDraft::new("", "2024-01-01").into_task("a".into()).is_err());
        assert!(TaskDraft::new("Title", "").into_task("a".into()).is_err());
        assert!(TaskDraft::new("Title", "not-a-date").into_task("a".into()).is_err());
    }

    #[test]
    fn test_is_overdue() {
        let task = TaskDraft::new("Pay rent", "2024-03-01").into_task("r".into()).unwrap();
        assert!(task.is_overdue(date("2024-03-02")));
        assert!(!task.is_overdue(date("2024-03-01")));
        assert!(!task.is_overdue(date("2024-02-28")));
    }
}
