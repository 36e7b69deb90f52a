//! Task domain and persistence for Dayplan.
//!
//! Tasks carry time-of-day scheduling metadata: a coarse [`domain::TimeSlot`]
//! bucket, an optional specific time, and a bounded duration. This module
//! owns the pure slot arithmetic, the ephemeral candidate type produced by
//! the generation pipeline, the persisted task aggregate, and the field
//! validation rules shared by every task-creation path. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Field validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod validation;

#[cfg(test)]
mod tests;
