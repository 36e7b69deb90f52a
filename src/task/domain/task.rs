//! Persisted task aggregate and its construction inputs.

use super::{TaskCandidate, TaskId, TimeSlot};
use crate::goal::domain::{GoalId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Unpersisted task awaiting a store-assigned identifier.
///
/// Parameter object handed to [`crate::task::ports::TaskStore::insert`];
/// timestamps are stamped from the injected clock at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owning user.
    pub owner_id: UserId,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Coarse time-of-day slot.
    pub time_slot: Option<TimeSlot>,
    /// Specific scheduled time.
    pub specific_time: Option<DateTime<Utc>>,
    /// Duration in minutes.
    pub duration_minutes: Option<i32>,
    /// Referenced goal.
    pub goal_id: Option<GoalId>,
    /// Whether the task is fixed in time.
    pub fixed: bool,
    /// Completion flag.
    pub completed: bool,
    /// Whether the task was authored by the generation pipeline.
    pub ai_generated: bool,
    /// Whether the task passed pipeline validation before persistence.
    pub ai_validated: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates a manually-authored task from a candidate.
    #[must_use]
    pub fn from_candidate(candidate: TaskCandidate, owner: UserId, clock: &impl Clock) -> Self {
        Self::build(candidate, owner, false, false, clock)
    }

    /// Creates a generator-authored task from a validated candidate.
    ///
    /// Generator-authored rows feed the daily generation gate, so this
    /// constructor is the only place the `ai_generated` flag is set.
    #[must_use]
    pub fn generated(candidate: TaskCandidate, owner: UserId, clock: &impl Clock) -> Self {
        Self::build(candidate, owner, true, true, clock)
    }

    fn build(
        candidate: TaskCandidate,
        owner: UserId,
        ai_generated: bool,
        ai_validated: bool,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            owner_id: owner,
            title: candidate.title().to_owned(),
            description: candidate.description().map(str::to_owned),
            time_slot: candidate.time_slot(),
            specific_time: candidate.specific_time(),
            duration_minutes: candidate.duration_minutes(),
            goal_id: candidate.goal_id(),
            fixed: candidate.fixed(),
            completed: false,
            ai_generated,
            ai_validated,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

/// Persisted task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    owner_id: UserId,
    title: String,
    description: Option<String>,
    time_slot: Option<TimeSlot>,
    specific_time: Option<DateTime<Utc>>,
    duration_minutes: Option<i32>,
    goal_id: Option<GoalId>,
    fixed: bool,
    completed: bool,
    ai_generated: bool,
    ai_validated: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning user.
    pub owner_id: UserId,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Coarse time-of-day slot.
    pub time_slot: Option<TimeSlot>,
    /// Specific scheduled time.
    pub specific_time: Option<DateTime<Utc>>,
    /// Duration in minutes.
    pub duration_minutes: Option<i32>,
    /// Referenced goal, nulled when the goal has been deleted.
    pub goal_id: Option<GoalId>,
    /// Whether the task is fixed in time.
    pub fixed: bool,
    /// Completion flag.
    pub completed: bool,
    /// Whether the task was authored by the generation pipeline.
    pub ai_generated: bool,
    /// Whether the task passed pipeline validation before persistence.
    pub ai_validated: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            time_slot: data.time_slot,
            specific_time: data.specific_time,
            duration_minutes: data.duration_minutes,
            goal_id: data.goal_id,
            fixed: data.fixed,
            completed: data.completed,
            ai_generated: data.ai_generated,
            ai_validated: data.ai_validated,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assigned time slot, if any.
    #[must_use]
    pub const fn time_slot(&self) -> Option<TimeSlot> {
        self.time_slot
    }

    /// Returns the specific scheduled time, if any.
    #[must_use]
    pub const fn specific_time(&self) -> Option<DateTime<Utc>> {
        self.specific_time
    }

    /// Returns the duration in minutes, if any.
    #[must_use]
    pub const fn duration_minutes(&self) -> Option<i32> {
        self.duration_minutes
    }

    /// Returns the referenced goal, if any.
    #[must_use]
    pub const fn goal_id(&self) -> Option<GoalId> {
        self.goal_id
    }

    /// Returns whether the task is fixed in time.
    #[must_use]
    pub const fn fixed(&self) -> bool {
        self.fixed
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns whether the task was authored by the generation pipeline.
    #[must_use]
    pub const fn ai_generated(&self) -> bool {
        self.ai_generated
    }

    /// Returns whether the task passed pipeline validation.
    #[must_use]
    pub const fn ai_validated(&self) -> bool {
        self.ai_validated
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
