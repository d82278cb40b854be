//! Common test utilities shared across integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the compiled taskgraph binary
pub fn taskgraph_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_taskgraph"))
}

/// Run the taskgraph binary in `dir` with plain (uncolored, ASCII) output
pub fn run_taskgraph_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(taskgraph_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("TASKGRAPH_ASCII", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute taskgraph binary")
}

/// Write `.taskgraph/tasks.jsonl` under `dir`
pub fn write_tasks(dir: &Path, lines: &[&str]) {
    let project = dir.join(".taskgraph");
    fs::create_dir_all(&project).expect("Failed to create .taskgraph");
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(project.join("tasks.jsonl"), content).expect("Failed to write tasks");
}
