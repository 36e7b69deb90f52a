//! Field validation for task candidates.
//!
//! The rules here form the shared validation engine used by the generation
//! pipeline and by any direct task-creation path. Every rule is a pure
//! function; the aggregate validator runs all rules and accumulates their
//! violations rather than stopping at the first failure. Error messages are
//! user-facing strings and are stable.

pub mod report;
pub mod rules;
mod service;

pub use report::{CandidateRuleError, ValidationReport};
pub use service::validate_candidate;
