//! In-memory task store for tests and local use.

mod store;

pub use store::InMemoryTaskStore;
