//! Pipeline outcome types.

use crate::task::domain::{Task, TaskCandidate};
use serde::Serialize;

/// Outcome of the daily generation gate check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLimitStatus {
    /// Whether a generation batch may run today.
    pub can_generate: bool,
    /// User-facing explanation of the gate state.
    pub message: String,
}

/// A candidate that failed validation or persistence, with its reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedCandidate {
    /// The rejected candidate.
    pub candidate: TaskCandidate,
    /// Failure reasons, in rule order for validation failures.
    pub errors: Vec<String>,
}

/// Outcome of one batch-persistence pass.
///
/// Successes and failures are tracked independently; a failed candidate
/// never aborts the remainder of the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Tasks persisted by this pass, in candidate order.
    pub saved: Vec<Task>,
    /// Candidates rejected by validation or by the store, in candidate order.
    pub failed: Vec<FailedCandidate>,
}

/// Successful response of one schedule-generation invocation.
///
/// This shape is the stable contract for any boundary layer; an invocation
/// that persists zero tasks is still a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    /// Tasks persisted by this invocation, in candidate order.
    pub tasks: Vec<Task>,
    /// Generator-supplied free-text reasoning.
    pub reasoning: String,
    /// Number of persisted tasks.
    pub total_generated: usize,
    /// Number of goals supplied to the generator.
    pub goals_processed: usize,
    /// Number of normalized candidates attempted.
    pub attempted_tasks: usize,
    /// Number of candidates that failed validation or persistence.
    pub failed_tasks: usize,
}
