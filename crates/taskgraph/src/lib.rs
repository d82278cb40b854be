//! Taskgraph - a task dependency graph engine.
//!
//! Turns a flat collection of tasks, each optionally depending on other
//! tasks, into an explicit directed graph. Two queries are supported:
//!
//! - the full graph of every task matching a status filter
//!   ([`graph::GraphService::build_graph`])
//! - the local neighborhood around one task up to a hop budget
//!   ([`graph::GraphService::build_neighbors`])
//!
//! Every result carries an exact cycle flag and annotates each node with the
//! task's cached urgency score (see [`urgency`]).
//!
//! # Example
//!
//! ```
//! use taskgraph::domain::{Task, TaskStatus};
//! use taskgraph::graph::GraphService;
//! use taskgraph::storage::InMemoryTaskStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> taskgraph::error::Result<()> {
//! let store = InMemoryTaskStore::from_tasks(vec![
//!     Task::new("proj-a", "Design schema"),
//!     Task::new("proj-b", "Write migration").with_depends(["proj-a"]),
//! ]);
//!
//! let graph = GraphService::new(&store).build_graph(&[TaskStatus::Pending]).await?;
//! assert_eq!(graph.nodes.len(), 2);
//! assert!(!graph.has_cycles);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod graph;
pub mod storage;
pub mod urgency;

// Public CLI module (needed by binary)
pub mod app;
pub mod cli;

pub mod config;
pub mod output;
