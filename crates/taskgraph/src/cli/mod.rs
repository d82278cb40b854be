//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `graph`: Full dependency graph, optionally filtered by status
//! - `neighbors`: Neighborhood of one task up to a hop budget
//! - `urgency`: Urgency breakdown of one task
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--data-file`: Read tasks from this JSONL file instead of the project's
//!
//! # Example
//!
//! ```bash
//! taskgraph graph --status pending,active
//! taskgraph neighbors proj-abc --depth 2 --no-placeholders
//! taskgraph --json urgency proj-abc
//! ```

mod args;
mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GraphArgs, NeighborsArgs, UrgencyArgs};
pub use types::TaskStatusArg;
pub use validators::{clamp_depth, validate_task_id};

/// Taskgraph - inspect task dependency graphs
///
/// Reads tasks from `.taskgraph/tasks.jsonl` (or `--data-file`) and prints
/// dependency graphs with cycle detection and urgency ordering.
#[derive(Parser, Debug)]
#[command(name = "taskgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Tasks JSONL file to read instead of the project's configured file
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the dependency graph of all matching tasks
    ///
    /// Dependencies that match no loaded task appear as placeholder nodes.
    Graph(GraphArgs),

    /// Show the neighborhood of one task
    ///
    /// Expands both dependencies and dependents up to `--depth` hops.
    Neighbors(NeighborsArgs),

    /// Show how a task's urgency score is composed
    Urgency(UrgencyArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let Some(command) = &self.command else {
            println!("Taskgraph dependency graph engine");
            println!("Use --help for more information");
            return Ok(());
        };

        let app = App::open(&std::env::current_dir()?, self.data_file.as_deref()).await?;
        match command {
            Commands::Graph(args) => execute::execute_graph(&app, args, output_mode).await,
            Commands::Neighbors(args) => execute::execute_neighbors(&app, args, output_mode).await,
            Commands::Urgency(args) => execute::execute_urgency(&app, args, output_mode).await,
        }
    }
}
