//! Thread-safe in-memory task store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::goal::domain::{GoalId, UserId};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    next_id: i64,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory task store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nulls the goal reference on every task pointing at the given goal.
    ///
    /// Mirrors the orphaning behaviour of the durable store when a goal is
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the internal lock is
    /// poisoned.
    pub fn detach_goal(&self, goal: GoalId) -> TaskStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        for task in state.tasks.values_mut() {
            if task.goal_id() == Some(goal) {
                *task = detach_task_goal(task);
            }
        }
        Ok(())
    }
}

fn detach_task_goal(task: &Task) -> Task {
    Task::from_persisted(PersistedTaskData {
        goal_id: None,
        ..task_to_persisted(task)
    })
}

fn task_to_persisted(task: &Task) -> PersistedTaskData {
    PersistedTaskData {
        id: task.id(),
        owner_id: task.owner_id(),
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        time_slot: task.time_slot(),
        specific_time: task.specific_time(),
        duration_minutes: task.duration_minutes(),
        goal_id: task.goal_id(),
        fixed: task.fixed(),
        completed: task.completed(),
        ai_generated: task.ai_generated(),
        ai_validated: task.ai_validated(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn new_task_to_persisted(id: TaskId, task: &NewTask) -> PersistedTaskData {
    PersistedTaskData {
        id,
        owner_id: task.owner_id,
        title: task.title.clone(),
        description: task.description.clone(),
        time_slot: task.time_slot,
        specific_time: task.specific_time,
        duration_minutes: task.duration_minutes,
        goal_id: task.goal_id,
        fixed: task.fixed,
        completed: task.completed,
        ai_generated: task.ai_generated,
        ai_validated: task.ai_validated,
        created_at: task.created_at,
        updated_at: task.updated_at,
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: &NewTask) -> TaskStoreResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        state.next_id += 1;
        let persisted = Task::from_persisted(new_task_to_persisted(
            TaskId::new(state.next_id),
            task,
        ));
        state.tasks.insert(persisted.id(), persisted.clone());
        Ok(persisted)
    }

    async fn generated_in_window(
        &self,
        owner: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TaskStoreResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state
            .tasks
            .values()
            .filter(|task| {
                task.owner_id() == owner
                    && task.ai_generated()
                    && task.created_at() >= start
                    && task.created_at() < end
            })
            .cloned()
            .collect())
    }

    async fn list_for_user(&self, owner: UserId) -> TaskStoreResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.owner_id() == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, owner: UserId, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state
            .tasks
            .get(&id)
            .filter(|task| task.owner_id() == owner)
            .cloned())
    }
}
