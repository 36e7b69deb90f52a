//! Goal ownership for Dayplan.
//!
//! Goals are the root of the productivity model: every generated task
//! references exactly one goal owned by the same user. The generation
//! pipeline reads goals through the [`ports::GoalStore`] contract and never
//! mutates them. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
