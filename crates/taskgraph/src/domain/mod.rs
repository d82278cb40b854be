//! Domain types for the task dependency graph.
//!
//! Tasks are owned by an external store; the graph engine only reads them.

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a task
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    /// Create a new task ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = Error;

    /// Parse a user-supplied id: trimmed, non-empty, no inner whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(Error::InvalidArgument("Task ID cannot be empty".to_string()));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(Error::InvalidArgument(format!(
                "Invalid task ID '{s}': must not contain whitespace"
            )));
        }

        Ok(Self::new(s))
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Pending,

    /// Parked until something external happens
    Waiting,

    /// Currently being worked on
    Active,

    /// Done
    Completed,

    /// Soft-deleted
    Deleted,
}

impl TaskStatus {
    /// Every status, in declaration order.
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Pending,
        TaskStatus::Waiting,
        TaskStatus::Active,
        TaskStatus::Completed,
        TaskStatus::Deleted,
    ];

    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Waiting => "waiting",
            TaskStatus::Active => "active",
            TaskStatus::Completed => "completed",
            TaskStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority level of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Highest priority
    High,

    /// Normal priority
    Medium,

    /// Low priority
    Low,

    /// No priority assigned
    #[default]
    None,
}

impl Priority {
    /// Every priority, highest first.
    pub const ALL: [Priority; 4] = [
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::None,
    ];

    /// Parse the upper-case display form (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(label))
    }

    /// Upper-case display form used on graph nodes (`HIGH`, `NONE`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
            Priority::None => "NONE",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A unit of work as seen by the graph engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task
    pub id: TaskId,

    /// Task title
    pub title: String,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Cached urgency score in `[0, 100]`, `None` if never computed
    #[serde(default)]
    pub urgency: Option<f64>,

    /// Assignee (optional)
    #[serde(default)]
    pub assignee: Option<String>,

    /// Display name of the owning project (optional)
    #[serde(default)]
    pub project_display_name: Option<String>,

    /// IDs of the tasks this task depends on
    #[serde(default)]
    pub depends: Vec<TaskId>,

    /// Due date (optional)
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    /// Create a pending task with no priority, dependencies or cached urgency.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::Pending,
            priority: Priority::None,
            urgency: None,
            assignee: None,
            project_display_name: None,
            depends: Vec::new(),
            due_date: None,
            created_at: Utc::now(),
            tags: Vec::new(),
        }
    }

    /// Set the status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the cached urgency.
    #[must_use]
    pub fn with_urgency(mut self, urgency: f64) -> Self {
        self.urgency = Some(urgency);
        self
    }

    /// Set the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the project display name.
    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project_display_name = Some(project.into());
        self
    }

    /// Replace the dependency list.
    #[must_use]
    pub fn with_depends<I, T>(mut self, depends: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        self.depends = depends.into_iter().map(Into::into).collect();
        self
    }

    /// Set the due date.
    #[must_use]
    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    /// Set the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Replace the tags.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Dependency IDs in list order with duplicates collapsed.
    pub fn dependency_ids(&self) -> impl Iterator<Item = &TaskId> {
        let mut seen = HashSet::new();
        self.depends.iter().filter(move |id| seen.insert(*id))
    }

    /// Whether this task lists `id` among its dependencies.
    pub fn depends_on(&self, id: &TaskId) -> bool {
        self.depends.contains(id)
    }

    /// Cached urgency, treating "never computed" as zero.
    pub fn urgency_or_zero(&self) -> f64 {
        self.urgency.unwrap_or(0.0)
    }

    /// Recompute and cache the urgency score against `now`.
    pub fn refresh_urgency(&mut self, now: DateTime<Utc>) {
        self.urgency = Some(crate::urgency::score(self, now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_id() {
        assert_eq!(" t-1 ".parse::<TaskId>().unwrap(), TaskId::new("t-1"));
        assert!(matches!(
            "".parse::<TaskId>(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            "t 1".parse::<TaskId>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_priority_label_round_trips() {
        for priority in Priority::ALL {
            assert_eq!(Priority::from_label(priority.label()), Some(priority));
        }
        assert_eq!(Priority::from_label("high"), Some(Priority::High));
        assert_eq!(Priority::from_label("urgent"), None);
    }

    #[test]
    fn test_dependency_ids_collapse_duplicates() {
        let task = Task::new("t-1", "Task").with_depends(["t-2", "t-3", "t-2"]);

        let ids: Vec<&str> = task.dependency_ids().map(TaskId::as_str).collect();
        assert_eq!(ids, vec!["t-2", "t-3"]);
    }

    #[test]
    fn test_missing_urgency_reads_as_zero() {
        let task = Task::new("t-1", "Task");
        assert!(task.urgency.is_none());
        assert!(task.urgency_or_zero().abs() < f64::EPSILON);
    }

    #[test]
    fn test_task_deserializes_with_defaults() {
        let json = r#"{"id":"t-1","title":"Minimal","created_at":"2024-01-01T00:00:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, TaskId::new("t-1"));
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, Priority::None);
        assert!(task.depends.is_empty());
        assert!(task.urgency.is_none());
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&TaskStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        assert_eq!(Priority::None.label(), "NONE");
    }
}
