//! Read-only task store abstraction.
//!
//! The graph engine never owns tasks. It reads them through [`TaskStore`],
//! whose implementations decide where tasks live:
//!
//! - **In-memory**: [`InMemoryTaskStore`], tasks held in insertion order
//! - **JSONL**: [`load_from_jsonl`] fills an in-memory store from a JSON Lines file
//!
//! # Test Utilities
//!
//! [`UnavailableStore`] fails every read with [`Error::StoreUnavailable`] and
//! is available under `cfg(test)` or the `test-util` feature.
//!
//! [`Error::StoreUnavailable`]: crate::error::Error::StoreUnavailable

use crate::domain::{Task, TaskId, TaskStatus};
use crate::error::Result;
use async_trait::async_trait;

mod in_memory;
mod jsonl;

pub use in_memory::InMemoryTaskStore;
pub use jsonl::{load_from_jsonl, LoadWarning};

/// Read access to the task collection.
///
/// Implementations must be `Send + Sync` so that any number of graph builds
/// can read concurrently. Every method returns tasks in the store's natural
/// order, which must be stable between calls that see the same data.
///
/// # Errors
///
/// Backend failures surface as `Error::StoreUnavailable`; callers get them
/// unmodified and no retries happen above this trait.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetch every task whose status is in `statuses`.
    ///
    /// An empty slice means "all statuses".
    async fn fetch_by_statuses(&self, statuses: &[TaskStatus]) -> Result<Vec<Task>>;

    /// Fetch one task by id, `None` if it doesn't exist.
    async fn fetch_by_id(&self, id: &TaskId) -> Result<Option<Task>>;

    /// Fetch the full task collection.
    async fn fetch_all(&self) -> Result<Vec<Task>>;
}

/// Whether `status` passes a status filter where empty means "all".
pub(crate) fn status_matches(statuses: &[TaskStatus], status: TaskStatus) -> bool {
    statuses.is_empty() || statuses.contains(&status)
}

/// A [`TaskStore`] whose every read fails.
///
/// # Availability
///
/// This type is available when:
/// - Running tests (`#[cfg(test)]`)
/// - The `test-util` feature is enabled
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone, Default)]
pub struct UnavailableStore {
    reason: String,
}

#[cfg(any(test, feature = "test-util"))]
impl UnavailableStore {
    /// Create a store that fails with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T> {
        Err(crate::error::Error::StoreUnavailable(self.reason.clone()))
    }
}

#[cfg(any(test, feature = "test-util"))]
#[async_trait]
impl TaskStore for UnavailableStore {
    async fn fetch_by_statuses(&self, _statuses: &[TaskStatus]) -> Result<Vec<Task>> {
        self.fail()
    }

    async fn fetch_by_id(&self, _id: &TaskId) -> Result<Option<Task>> {
        self.fail()
    }

    async fn fetch_all(&self) -> Result<Vec<Task>> {
        self.fail()
    }
}
