//! CLI argument structs for all commands.

use clap::Parser;

use super::types::TaskStatusArg;
use super::validators::validate_task_id;
use crate::domain::TaskId;

/// Arguments for the `graph` command
#[derive(Parser, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Only include tasks with these statuses (comma-separated)
    ///
    /// Defaults to `graph.default-statuses` from the config; empty means all.
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub status: Vec<TaskStatusArg>,
}

/// Arguments for the `neighbors` command
#[derive(Parser, Debug, Clone)]
pub struct NeighborsArgs {
    /// Task at the center of the neighborhood
    #[arg(value_parser = validate_task_id)]
    pub task_id: TaskId,

    /// Maximum number of hops to expand (negative values count as 0)
    ///
    /// Defaults to `graph.default-depth` from the config.
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Drop dependencies that resolve to no task instead of showing placeholders
    #[arg(long)]
    pub no_placeholders: bool,
}

/// Arguments for the `urgency` command
#[derive(Parser, Debug, Clone)]
pub struct UrgencyArgs {
    /// Task to score
    #[arg(value_parser = validate_task_id)]
    pub task_id: TaskId,
}
