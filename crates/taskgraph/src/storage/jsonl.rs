//! JSONL loading for the in-memory task store.
//!
//! Each non-blank line of the file is one serialized [`Task`]. Loading is
//! resilient: bad lines are skipped and reported as [`LoadWarning`]s instead
//! of failing the whole load.

use super::InMemoryTaskStore;
use crate::domain::{Task, TaskId};
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Non-fatal problems found while loading a JSONL file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// Line could not be parsed as a task
    ///
    /// **Effect**: the line is skipped.
    MalformedJson {
        /// 1-based line number
        line_number: usize,
        /// Parser message
        error: String,
    },

    /// Two lines carry the same task id
    ///
    /// **Effect**: the later line wins but keeps the position of the first.
    DuplicateId {
        /// The repeated id
        id: TaskId,
        /// 1-based line number of the later occurrence
        line_number: usize,
    },
}

/// Load a task store from a JSONL file.
///
/// Tasks without a cached urgency get one computed with the current clock.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be opened or read. Malformed lines
/// are not errors; see [`LoadWarning`].
pub async fn load_from_jsonl(path: &Path) -> Result<(InMemoryTaskStore, Vec<LoadWarning>)> {
    let file = File::open(path).await?;
    let (tasks, warnings) = read_tasks(file, Utc::now()).await?;

    tracing::debug!(
        path = %path.display(),
        tasks = tasks.len(),
        warnings = warnings.len(),
        "Loaded tasks from JSONL"
    );

    Ok((InMemoryTaskStore::from_tasks(tasks), warnings))
}

/// Parse tasks from any async reader, computing missing urgency at `now`.
pub(crate) async fn read_tasks<R>(reader: R, now: DateTime<Utc>) -> Result<(Vec<Task>, Vec<LoadWarning>)>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut tasks: Vec<Task> = Vec::new();
    let mut positions: HashMap<TaskId, usize> = HashMap::new();
    let mut warnings = Vec::new();
    let mut line_number = 0;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut task: Task = match serde_json::from_str(&line) {
            Ok(task) => task,
            Err(e) => {
                tracing::warn!(line_number, error = %e, "Skipping malformed task line");
                warnings.push(LoadWarning::MalformedJson {
                    line_number,
                    error: e.to_string(),
                });
                continue;
            }
        };

        if task.urgency.is_none() {
            task.refresh_urgency(now);
        }

        if let Some(&pos) = positions.get(&task.id) {
            tracing::warn!(id = %task.id, line_number, "Duplicate task id, keeping later line");
            warnings.push(LoadWarning::DuplicateId {
                id: task.id.clone(),
                line_number,
            });
            tasks[pos] = task;
        } else {
            positions.insert(task.id.clone(), tasks.len());
            tasks.push(task);
        }
    }

    Ok((tasks, warnings))
}
