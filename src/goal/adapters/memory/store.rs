//! Thread-safe in-memory goal store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::goal::{
    domain::{Goal, GoalId, NewGoal, PersistedGoalData, UserId},
    ports::{GoalStore, GoalStoreError, GoalStoreResult},
};

/// Thread-safe in-memory goal store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGoalStore {
    state: Arc<RwLock<InMemoryGoalState>>,
}

#[derive(Debug, Default)]
struct InMemoryGoalState {
    goals: BTreeMap<GoalId, Goal>,
    next_id: i64,
}

impl InMemoryGoalStore {
    /// Creates an empty in-memory goal store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GoalStore for InMemoryGoalStore {
    async fn insert(&self, goal: &NewGoal) -> GoalStoreResult<Goal> {
        let mut state = self
            .state
            .write()
            .map_err(|err| GoalStoreError::persistence(std::io::Error::other(err.to_string())))?;
        state.next_id += 1;
        let persisted = Goal::from_persisted(PersistedGoalData {
            id: GoalId::new(state.next_id),
            owner_id: goal.owner_id(),
            title: goal.title().to_owned(),
            description: goal.description().map(str::to_owned),
        });
        state.goals.insert(persisted.id(), persisted.clone());
        Ok(persisted)
    }

    async fn list_for_user(&self, owner: UserId) -> GoalStoreResult<Vec<Goal>> {
        let state = self
            .state
            .read()
            .map_err(|err| GoalStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state
            .goals
            .values()
            .filter(|goal| goal.owner_id() == owner)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: GoalId) -> GoalStoreResult<bool> {
        let mut state = self
            .state
            .write()
            .map_err(|err| GoalStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.goals.remove(&id).is_some())
    }
}
