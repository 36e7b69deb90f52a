//! Error types for goal domain validation.

use thiserror::Error;

/// Errors returned while constructing domain goal values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GoalDomainError {
    /// The goal title is empty after trimming.
    #[error("goal title must not be empty")]
    EmptyTitle,
}
