//! Store port for task persistence and time-windowed queries.

use crate::goal::domain::UserId;
use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Implementations null a task's goal reference when the referenced goal is
/// deleted; goal deletion never cascades to tasks.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task as its own unit of work and returns the persisted
    /// record with its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Constraint`] when a database constraint
    /// rejects the row, or [`TaskStoreError::Persistence`] for any other
    /// storage failure.
    async fn insert(&self, task: &NewTask) -> TaskStoreResult<Task>;

    /// Returns the user's generator-authored tasks created inside the
    /// half-open window `[start, end)`.
    async fn generated_in_window(
        &self,
        owner: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TaskStoreResult<Vec<Task>>;

    /// Returns all tasks owned by the given user, in stable insertion order.
    async fn list_for_user(&self, owner: UserId) -> TaskStoreResult<Vec<Task>>;

    /// Looks up one of the user's tasks by identifier.
    async fn find_by_id(&self, owner: UserId, id: TaskId) -> TaskStoreResult<Option<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A database constraint rejected the row.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
