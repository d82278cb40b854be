//! Output formatting for CLI commands.
//!
//! Every printer supports human-readable text and JSON. Text writers take a
//! generic [`Write`] so they can be tested against a buffer.

pub mod color;

use crate::domain::TaskId;
use crate::error::Result;
use crate::graph::{GraphNode, GraphResult};
use crate::urgency::UrgencyBreakdown;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

use color::{bold, colored_status_icon, colorize_id, colorize_priority, dimmed, error, warning};

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Configuration for text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use ASCII-only icons instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an OutputConfig with explicit values.
    pub fn new(use_ascii: bool, use_colors: bool) -> Self {
        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Create an OutputConfig from environment variables.
    ///
    /// Reads:
    /// - `TASKGRAPH_ASCII`: "1" or "true" for ASCII-only icons
    /// - `NO_COLOR`: any value disables colors
    /// - `TASKGRAPH_COLOR`: "0" or "false" disables colors
    pub fn from_env() -> Self {
        let use_ascii = env::var("TASKGRAPH_ASCII")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        // https://no-color.org/
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("TASKGRAPH_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(false, true)
    }
}

/// Urgency of one task, as printed by the `urgency` command.
#[derive(Debug, Clone, Serialize)]
pub struct UrgencyReport<'a> {
    /// Task the breakdown belongs to
    pub id: &'a TaskId,
    /// Per-component contributions
    pub breakdown: UrgencyBreakdown,
    /// Clamped total
    pub total: f64,
}

/// Write any serializable value as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns `Error::Json` if `value` cannot be serialized and `Error::Io` if
/// the writer fails.
pub fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)?;
    Ok(())
}

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

/// Print a graph result in the specified format.
pub fn print_graph(result: &GraphResult, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => print_json(result),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_graph_text(&mut handle, result, &OutputConfig::from_env())?;
            Ok(())
        }
    }
}

/// Print an urgency breakdown in the specified format.
pub fn print_urgency(report: &UrgencyReport<'_>, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => print_json(report),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_urgency_text(&mut handle, report, &OutputConfig::from_env())?;
            Ok(())
        }
    }
}

/// Render a graph result as text: nodes by urgency, then edges, then the cycle flag.
pub fn write_graph_text<W: Write>(
    w: &mut W,
    result: &GraphResult,
    config: &OutputConfig,
) -> io::Result<()> {
    if result.is_empty() {
        match &result.center_id {
            Some(center) => writeln!(w, "Task {} not found.", colorize_id(center.as_str(), config))?,
            None => writeln!(w, "No tasks matched.")?,
        }
        return Ok(());
    }

    let summary = format!(
        "{} nodes, {} edges",
        result.nodes.len(),
        result.edges.len()
    );
    match &result.center_id {
        Some(center) => writeln!(
            w,
            "{} {} ({summary})",
            bold("Neighbors of", config),
            colorize_id(center.as_str(), config)
        )?,
        None => writeln!(w, "{} ({summary})", bold("Task graph", config))?,
    }

    writeln!(w)?;
    writeln!(w, "{}", bold("Nodes (by urgency):", config))?;
    for node in result.nodes_by_urgency() {
        write_node_line(w, node, config)?;
    }

    if !result.edges.is_empty() {
        writeln!(w)?;
        writeln!(w, "{}", bold("Edges (dependency -> dependent):", config))?;
        for edge in &result.edges {
            writeln!(
                w,
                "  {} {} {}",
                colorize_id(edge.from.as_str(), config),
                dimmed("->", config),
                colorize_id(edge.to.as_str(), config)
            )?;
        }
    }

    if result.has_cycles {
        writeln!(w)?;
        writeln!(w, "{}", error("Cycle detected in dependency graph", config))?;
    }

    Ok(())
}

fn write_node_line<W: Write>(w: &mut W, node: &GraphNode, config: &OutputConfig) -> io::Result<()> {
    let mut line = format!(
        "  {} {} {:>6.2} {} {}",
        colored_status_icon(node.status, config),
        colorize_id(node.id.as_str(), config),
        node.urgency,
        colorize_priority(node.priority, config),
        node.title
    );

    if node.placeholder {
        line.push(' ');
        line.push_str(&warning("(placeholder)", config));
    }
    if let Some(project) = &node.project_display_name {
        line.push_str(&dimmed(&format!(" [{project}]"), config));
    }
    if let Some(assignee) = &node.assignee {
        line.push_str(&dimmed(&format!(" @{assignee}"), config));
    }

    writeln!(w, "{line}")
}

/// Render an urgency breakdown as text.
pub fn write_urgency_text<W: Write>(
    w: &mut W,
    report: &UrgencyReport<'_>,
    config: &OutputConfig,
) -> io::Result<()> {
    let b = &report.breakdown;
    writeln!(
        w,
        "{} {}",
        bold("Urgency of", config),
        colorize_id(report.id.as_str(), config)
    )?;
    for (label, value) in [
        ("priority", b.priority),
        ("due date", b.due_date),
        ("age", b.age),
        ("status", b.status),
        ("tags", b.tags),
    ] {
        // Pad before styling so escape codes don't count toward the width
        writeln!(w, "  {}{value:>+8.2}", dimmed(&format!("{label:<9}"), config))?;
    }
    writeln!(
        w,
        "  {}{:>8.2}",
        bold(&format!("{:<9}", "total"), config),
        report.total
    )
}
