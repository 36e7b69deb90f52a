//! AI-assisted daily schedule generation for Dayplan.
//!
//! This module implements the generation pipeline: load the user's goals,
//! check the once-per-UTC-day generation gate, invoke the external
//! text-generation backend, normalize its untrusted output into well-formed
//! candidates, and persist each candidate independently so one failure never
//! aborts the batch. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Output repair in [`normalize`]
//! - Prompt construction in [`prompt`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod normalize;
pub mod ports;
pub mod prompt;
pub mod services;

#[cfg(test)]
mod tests;
