//! In-memory task store.
//!
//! Tasks are kept in insertion order with an id index for O(1) lookups.
//! The store is a cheap-to-clone handle over `Arc<RwLock<..>>`; reads take a
//! shared lock so concurrent graph builds never block each other.

use super::{status_matches, TaskStore};
use crate::domain::{Task, TaskId, TaskStatus};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Storage structure behind the lock (not thread-safe).
#[derive(Debug, Default)]
struct InMemoryTaskStoreInner {
    /// Tasks in insertion order
    tasks: Vec<Task>,

    /// Position of each task in `tasks`
    index: HashMap<TaskId, usize>,
}

impl InMemoryTaskStoreInner {
    /// Insert `task`, replacing an existing task with the same id in place.
    ///
    /// Returns `true` if a task was replaced.
    fn upsert(&mut self, task: Task) -> bool {
        if let Some(&pos) = self.index.get(&task.id) {
            self.tasks[pos] = task;
            true
        } else {
            self.index.insert(task.id.clone(), self.tasks.len());
            self.tasks.push(task);
            false
        }
    }
}

/// Thread-safe in-memory [`TaskStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    inner: Arc<RwLock<InMemoryTaskStoreInner>>,
}

impl InMemoryTaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `tasks` in the given order.
    ///
    /// A later task with an already-seen id replaces the earlier one in place.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut inner = InMemoryTaskStoreInner::default();
        for task in tasks {
            inner.upsert(task);
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Insert or replace a task. Returns `true` if an existing task was replaced.
    pub async fn upsert(&self, task: Task) -> bool {
        self.inner.write().await.upsert(task)
    }

    /// Number of stored tasks.
    pub async fn len(&self) -> usize {
        self.inner.read().await.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.tasks.is_empty()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn fetch_by_statuses(&self, statuses: &[TaskStatus]) -> Result<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner
            .tasks
            .iter()
            .filter(|t| status_matches(statuses, t.status))
            .cloned()
            .collect())
    }

    async fn fetch_by_id(&self, id: &TaskId) -> Result<Option<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.index.get(id).map(|&pos| inner.tasks[pos].clone()))
    }

    async fn fetch_all(&self) -> Result<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.clone())
    }
}
