//! Store port for user scheduling preferences.

use crate::goal::domain::UserId;
use crate::schedule::domain::UserPreferences;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for preference store operations.
pub type PreferenceStoreResult<T> = Result<T, PreferenceStoreError>;

/// Preference retrieval contract.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Returns the user's preferences, or `None` when never configured.
    async fn find_for_user(&self, owner: UserId) -> PreferenceStoreResult<Option<UserPreferences>>;
}

/// Errors returned by preference store implementations.
#[derive(Debug, Clone, Error)]
pub enum PreferenceStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PreferenceStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
