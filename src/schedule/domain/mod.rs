//! Domain model for the generation pipeline.
//!
//! The raw generator output types deliberately keep every field optional:
//! the external service is untrusted and its output is never persisted
//! without passing through normalization and field validation.

mod plan;
mod preferences;
mod report;

pub use plan::{GeneratedPlan, RawGeneratedTask};
pub use preferences::UserPreferences;
pub use report::{BatchOutcome, DailyLimitStatus, FailedCandidate, ScheduleReport};
