//! `PostgreSQL` adapter for goal persistence.

mod models;
mod schema;
mod store;

pub use store::{GoalPgPool, PostgresGoalStore};
