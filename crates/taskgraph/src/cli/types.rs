//! CLI value enums and domain type conversions.

use clap::ValueEnum;

use crate::domain::TaskStatus;

/// Task status for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatusArg {
    /// Not started
    Pending,
    /// Parked
    Waiting,
    /// In progress
    Active,
    /// Done
    Completed,
    /// Soft-deleted
    Deleted,
}

impl From<TaskStatusArg> for TaskStatus {
    fn from(arg: TaskStatusArg) -> Self {
        match arg {
            TaskStatusArg::Pending => TaskStatus::Pending,
            TaskStatusArg::Waiting => TaskStatus::Waiting,
            TaskStatusArg::Active => TaskStatus::Active,
            TaskStatusArg::Completed => TaskStatus::Completed,
            TaskStatusArg::Deleted => TaskStatus::Deleted,
        }
    }
}

impl std::fmt::Display for TaskStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", TaskStatus::from(*self))
    }
}
