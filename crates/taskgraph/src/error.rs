//! Error types for taskgraph operations.

use std::io;
use thiserror::Error;

/// The error type for taskgraph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The task store could not serve a read.
    ///
    /// Graph builders propagate this unmodified; retry policy belongs to the store.
    #[error("Task store unavailable: {0}")]
    StoreUnavailable(String),

    /// A caller-supplied argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Configuration-specific failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `.taskgraph/` directory was found walking up from the working directory.
    #[error("not a taskgraph project (no .taskgraph directory found)")]
    NotInitialized,

    /// The configuration file could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// A specialized Result type for taskgraph operations.
pub type Result<T> = std::result::Result<T, Error>;
