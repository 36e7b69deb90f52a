//! Thread-safe in-memory preference store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::goal::domain::UserId;
use crate::schedule::{
    domain::UserPreferences,
    ports::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult},
};

/// Thread-safe in-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    state: Arc<RwLock<HashMap<UserId, UserPreferences>>>,
}

impl InMemoryPreferenceStore {
    /// Creates an empty in-memory preference store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores preferences for a user, replacing any existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError::Persistence`] when the internal lock
    /// is poisoned.
    pub fn set(&self, owner: UserId, preferences: UserPreferences) -> PreferenceStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PreferenceStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert(owner, preferences);
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn find_for_user(&self, owner: UserId) -> PreferenceStoreResult<Option<UserPreferences>> {
        let state = self.state.read().map_err(|err| {
            PreferenceStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&owner).cloned())
    }
}
