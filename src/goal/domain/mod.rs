//! Domain model for goal ownership.
//!
//! Goals carry an immutable identity and are owned exclusively by one user.
//! Identifier newtypes for users and goals live here because every other
//! context references them.

mod error;
mod goal;
mod ids;

pub use error::GoalDomainError;
pub use goal::{Goal, NewGoal, PersistedGoalData};
pub use ids::{GoalId, UserId};
