//! Dayplan: AI-assisted daily schedule generation backend.
//!
//! This crate provides the core functionality for turning a user's goals
//! and free-text preferences into a batch of time-slotted tasks, produced
//! by an external text-generation service, defensively normalized, and
//! persisted candidate by candidate.
//!
//! # Architecture
//!
//! Dayplan follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, test doubles)
//!
//! # Modules
//!
//! - [`goal`]: Goal ownership and retrieval
//! - [`task`]: Time-slot arithmetic, task domain, and field validation
//! - [`schedule`]: The generation pipeline (gate, normalizer, persistence,
//!   orchestration)

pub mod goal;
pub mod schedule;
pub mod task;
