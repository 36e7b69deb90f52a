//! Ephemeral task candidates produced by normalization.

use super::TimeSlot;
use crate::goal::domain::GoalId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Smallest persistable task duration, in minutes.
pub const MIN_DURATION_MINUTES: i32 = 5;
/// Largest persistable task duration, in minutes.
pub const MAX_DURATION_MINUTES: i32 = 480;
/// Duration assigned when a generator omits one, in minutes.
pub const DEFAULT_DURATION_MINUTES: i32 = 30;

/// Unpersisted, possibly-invalid task proposal.
///
/// Candidates are created transiently by the generation pipeline (or any
/// direct task-creation path), run through field validation, and either
/// become persisted tasks or are discarded with a recorded failure reason.
/// They are never stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCandidate {
    title: String,
    description: Option<String>,
    time_slot: Option<TimeSlot>,
    specific_time: Option<DateTime<Utc>>,
    duration_minutes: Option<i32>,
    goal_id: Option<GoalId>,
    fixed: bool,
}

impl TaskCandidate {
    /// Creates a candidate with the given title and no scheduling metadata.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            time_slot: None,
            specific_time: None,
            duration_minutes: None,
            goal_id: None,
            fixed: false,
        }
    }

    /// Sets the candidate description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the coarse time-of-day slot.
    #[must_use]
    pub const fn with_time_slot(mut self, slot: TimeSlot) -> Self {
        self.time_slot = Some(slot);
        self
    }

    /// Sets the specific scheduled time.
    #[must_use]
    pub const fn with_specific_time(mut self, specific_time: DateTime<Utc>) -> Self {
        self.specific_time = Some(specific_time);
        self
    }

    /// Sets the duration in minutes.
    #[must_use]
    pub const fn with_duration_minutes(mut self, minutes: i32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Sets the referenced goal.
    #[must_use]
    pub const fn with_goal_id(mut self, goal_id: GoalId) -> Self {
        self.goal_id = Some(goal_id);
        self
    }

    /// Marks the candidate as fixed in time (not reschedulable).
    #[must_use]
    pub const fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Returns the candidate title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the candidate description, if any.
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

    /// Returns whether the candidate is fixed in time.
    #[must_use]
    pub const fn fixed(&self) -> bool {
        self.fixed
    }

    /// Returns the identity tuple used for batch deduplication.
    #[must_use]
    pub fn dedup_key(&self) -> (String, Option<GoalId>, Option<DateTime<Utc>>) {
        (self.title.clone(), self.goal_id, self.specific_time)
    }
}
