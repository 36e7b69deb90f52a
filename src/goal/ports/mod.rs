//! Port contracts for goal retrieval and persistence.

pub mod store;

pub use store::{GoalStore, GoalStoreError, GoalStoreResult};
