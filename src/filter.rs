// View projection: status filter plus title search

use crate::models::{Task, TaskStatus};
use eyre::{Result, eyre};
use std::fmt;
use std::str::FromStr;

/// Status selector shown next to the search box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl From<TaskStatus> for StatusFilter {
    fn from(status: TaskStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<TaskStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| eyre!("Unknown filter: {} (expected all, pending, in-progress or completed)", s))
    }
}

/// Both inputs of the projection, as held by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    pub status: StatusFilter,
    pub search: String,
}

impl ViewFilter {
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        Self {
            status,
            search: search.into(),
        }
    }

    /// Status matches and the title contains the search text, ignoring case
    pub fn matches(&self, task: &Task) -> bool {
        self.status.matches(task.status) && title_contains(&task.title, &self.search.to_lowercase())
    }

    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        project(tasks, self.status, &self.search)
    }

    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All || !self.search.is_empty()
    }
}

/// Ordered subsequence of `tasks` to display
///
/// Stable: included tasks keep their relative order. Only the title is
/// searched; an empty search matches everything.
pub fn project(tasks: &[Task], status: StatusFilter, search: &str) -> Vec<Task> {
    let needle = search.to_lowercase();
    tasks
        .iter()
        .filter(|t| status.matches(t.status) && title_contains(&t.title, &needle))
        .cloned()
        .collect()
}

fn title_contains(title: &str, lowered_needle: &str) -> bool {
    lowered_needle.is_empty() || title.to_lowercase().contains(lowered_needle)
}
