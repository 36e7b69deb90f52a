//! In-memory goal store for tests and local use.

mod store;

pub use store::InMemoryGoalStore;
