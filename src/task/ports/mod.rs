//! Port contracts for task persistence.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
