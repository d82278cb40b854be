//! Application context for CLI command execution.
//!
//! Resolves configuration, loads the task store and hands both to commands.

use crate::config::TaskgraphConfig;
use crate::error::{ConfigError, Error, Result};
use crate::storage::{load_from_jsonl, InMemoryTaskStore};
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
#[derive(Debug)]
pub struct App {
    store: InMemoryTaskStore,
    config: TaskgraphConfig,
    data_path: PathBuf,
}

impl App {
    /// Open the project containing `working_dir`.
    ///
    /// With `data_file` set, that file is loaded directly and a project
    /// directory is optional (its config is still honored if present).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No project is found and no `data_file` was given
    /// - Configuration cannot be parsed
    /// - The tasks file cannot be read
    pub async fn open(working_dir: &Path, data_file: Option<&Path>) -> Result<Self> {
        let (data_path, config) = match data_file {
            Some(path) => {
                let config = match TaskgraphConfig::discover(working_dir).await {
                    Ok((_, config)) => config,
                    Err(Error::Config(ConfigError::NotInitialized)) => TaskgraphConfig::default(),
                    Err(e) => return Err(e),
                };
                (path.to_path_buf(), config)
            }
            None => {
                let (root, config) = TaskgraphConfig::discover(working_dir).await?;
                (config.data_path(&root), config)
            }
        };

        let (store, warnings) = load_from_jsonl(&data_path).await?;
        if !warnings.is_empty() {
            tracing::warn!(
                path = %data_path.display(),
                count = warnings.len(),
                "Some task lines were skipped or merged while loading"
            );
        }

        Ok(Self {
            store,
            config,
            data_path,
        })
    }

    /// The loaded task store.
    pub fn store(&self) -> &InMemoryTaskStore {
        &self.store
    }

    /// The effective configuration.
    pub fn config(&self) -> &TaskgraphConfig {
        &self.config
    }

    /// Path of the loaded tasks file.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}
