//! Goal aggregate and its construction inputs.

use super::{GoalDomainError, GoalId, UserId};
use serde::{Deserialize, Serialize};

/// Goal aggregate root.
///
/// A goal is owned exclusively by one user and its identity never changes.
/// Deleting a goal elsewhere in the system orphans referencing tasks (their
/// goal reference is nulled) rather than cascading the delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    id: GoalId,
    owner_id: UserId,
    title: String,
    description: Option<String>,
}

/// Parameter object for reconstructing a persisted goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedGoalData {
    /// Persisted goal identifier.
    pub id: GoalId,
    /// Owning user.
    pub owner_id: UserId,
    /// Goal title.
    pub title: String,
    /// Optional goal description.
    pub description: Option<String>,
}

impl Goal {
    /// Reconstructs a goal from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedGoalData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
        }
    }

    /// Returns the goal identifier.
    #[must_use]
    pub const fn id(&self) -> GoalId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the goal title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the goal description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Unpersisted goal awaiting a database-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    owner_id: UserId,
    title: String,
    description: Option<String>,
}

impl NewGoal {
    /// Creates a validated new goal for the given owner.
    ///
    /// # Errors
    ///
    /// Returns [`GoalDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(owner_id: UserId, title: impl Into<String>) -> Result<Self, GoalDomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(GoalDomainError::EmptyTitle);
        }
        Ok(Self {
            owner_id,
            title,
            description: None,
        })
    }

    /// Sets the goal description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the goal title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the goal description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
