//! `PostgreSQL` adapter for preference retrieval.

mod models;
mod schema;
mod store;

pub use store::{PostgresPreferenceStore, PreferencePgPool};
