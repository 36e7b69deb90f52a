//! Store port for goal persistence and per-user retrieval.

use crate::goal::domain::{Goal, GoalId, NewGoal, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for goal store operations.
pub type GoalStoreResult<T> = Result<T, GoalStoreError>;

/// Goal persistence contract.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Stores a new goal and returns the persisted record with its
    /// store-assigned identifier.
    async fn insert(&self, goal: &NewGoal) -> GoalStoreResult<Goal>;

    /// Returns all goals owned by the given user, in stable insertion order.
    ///
    /// The generation pipeline treats this list as a snapshot: the first
    /// entry is the healing target for invalid goal references.
    async fn list_for_user(&self, owner: UserId) -> GoalStoreResult<Vec<Goal>>;

    /// Deletes a goal, returning whether a record was removed.
    ///
    /// Tasks referencing the goal are orphaned, not deleted: the store
    /// layer nulls their goal reference.
    async fn delete(&self, id: GoalId) -> GoalStoreResult<bool>;
}

/// Errors returned by goal store implementations.
#[derive(Debug, Clone, Error)]
pub enum GoalStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl GoalStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
