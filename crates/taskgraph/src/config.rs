//! Project configuration.
//!
//! Configuration lives in `.taskgraph/config.yaml`, found by walking up from
//! the working directory. Every key is optional:
//!
//! ```yaml
//! storage:
//!   data-file: .taskgraph/tasks.jsonl
//! graph:
//!   default-depth: 2
//!   include-placeholders: true
//!   default-statuses: [pending, waiting, active]
//! ```

use crate::domain::TaskStatus;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the project directory
pub const TASKGRAPH_DIR_NAME: &str = ".taskgraph";

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the default tasks data file
pub const TASKS_FILE_NAME: &str = "tasks.jsonl";

/// Default hop budget for neighbors queries
pub const DEFAULT_DEPTH: usize = 2;

/// Maximum directory depth to traverse when searching for the project root
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct TaskgraphConfig {
    /// Storage configuration
    pub storage: StorageConfig,

    /// Graph query defaults
    pub graph: GraphConfig,
}

/// Storage configuration section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct StorageConfig {
    /// Path to the tasks JSONL file, relative to the project root
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: format!("{TASKGRAPH_DIR_NAME}/{TASKS_FILE_NAME}"),
        }
    }
}

/// Graph query defaults section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GraphConfig {
    /// Hop budget used when `neighbors` gets no `--depth`
    pub default_depth: usize,

    /// Whether neighbors queries synthesize placeholder nodes
    pub include_placeholders: bool,

    /// Statuses used when `graph` gets no `--status` (empty = all)
    pub default_statuses: Vec<TaskStatus>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_depth: DEFAULT_DEPTH,
            include_placeholders: true,
            default_statuses: Vec::new(),
        }
    }
}

impl TaskgraphConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        Self::from_yaml(&content)
    }

    /// Load the configuration of the project containing `start_dir`.
    ///
    /// Returns the project root and its configuration. A project directory
    /// without a config file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if no `.taskgraph/` directory is found.
    pub async fn discover(start_dir: &Path) -> Result<(PathBuf, Self)> {
        let root = find_project_root(start_dir).ok_or(ConfigError::NotInitialized)?;
        let config_path = root.join(TASKGRAPH_DIR_NAME).join(CONFIG_FILE_NAME);

        let config = if config_path.exists() {
            Self::load(&config_path).await?
        } else {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            Self::default()
        };

        Ok((root, config))
    }

    /// Absolute path of the tasks file for a project rooted at `root`.
    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.storage.data_file)
    }

    fn validate(&self) -> Result<()> {
        if self.storage.data_file.trim().is_empty() {
            return Err(ConfigError::Invalid("storage.data-file cannot be empty".to_string()).into());
        }
        Ok(())
    }
}

/// Find the nearest ancestor of `start_dir` (inclusive) containing `.taskgraph/`.
pub fn find_project_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    let mut depth = 0;

    loop {
        if current.join(TASKGRAPH_DIR_NAME).is_dir() {
            return Some(current);
        }

        depth += 1;
        if depth > MAX_TRAVERSAL_DEPTH || !current.pop() {
            return None;
        }
    }
}
