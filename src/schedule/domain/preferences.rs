//! User scheduling preferences.

use crate::task::domain::TimeSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Read-only scheduling preferences supplied to the generation backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    user_context: String,
    preferred_time_slots: BTreeSet<TimeSlot>,
}

impl UserPreferences {
    /// Creates preferences with the given free-text user context.
    #[must_use]
    pub fn new(user_context: impl Into<String>) -> Self {
        Self {
            user_context: user_context.into(),
            preferred_time_slots: BTreeSet::new(),
        }
    }

    /// Sets the preferred time slots.
    #[must_use]
    pub fn with_preferred_slots(mut self, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.preferred_time_slots = slots.into_iter().collect();
        self
    }

    /// Returns the free-text user context.
    #[must_use]
    pub fn user_context(&self) -> &str {
        &self.user_context
    }

    /// Returns the preferred time slots.
    #[must_use]
    pub const fn preferred_time_slots(&self) -> &BTreeSet<TimeSlot> {
        &self.preferred_time_slots
    }
}
