//! Command execution logic.

use anyhow::Result;
use chrono::Utc;

use super::args::{GraphArgs, NeighborsArgs, UrgencyArgs};
use super::validators::clamp_depth;
use crate::app::App;
use crate::domain::TaskStatus;
use crate::graph::GraphService;
use crate::output::{self, OutputMode, UrgencyReport};
use crate::storage::TaskStore;
use crate::urgency::UrgencyBreakdown;

/// Execute the graph command
pub async fn execute_graph(app: &App, args: &GraphArgs, output_mode: OutputMode) -> Result<()> {
    let statuses: Vec<TaskStatus> = if args.status.is_empty() {
        app.config().graph.default_statuses.clone()
    } else {
        args.status.iter().copied().map(TaskStatus::from).collect()
    };

    let result = GraphService::new(app.store())
        .build_graph(&statuses)
        .await?;

    output::print_graph(&result, output_mode)?;
    Ok(())
}

/// Execute the neighbors command
pub async fn execute_neighbors(
    app: &App,
    args: &NeighborsArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let depth = args
        .depth
        .map_or(app.config().graph.default_depth, clamp_depth);
    let include_placeholders = app.config().graph.include_placeholders && !args.no_placeholders;

    let result = GraphService::new(app.store())
        .build_neighbors(&args.task_id, depth, include_placeholders)
        .await?;

    output::print_graph(&result, output_mode)?;
    Ok(())
}

/// Execute the urgency command
pub async fn execute_urgency(app: &App, args: &UrgencyArgs, output_mode: OutputMode) -> Result<()> {
    let Some(task) = app.store().fetch_by_id(&args.task_id).await? else {
        anyhow::bail!("Task not found: {}", args.task_id);
    };

    let breakdown = UrgencyBreakdown::compute(&task, Utc::now());
    let report = UrgencyReport {
        id: &task.id,
        breakdown,
        total: breakdown.total(),
    };

    output::print_urgency(&report, output_mode)?;
    Ok(())
}
