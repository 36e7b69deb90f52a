//! Validation outcome types with stable user-facing messages.

use crate::task::domain::TimeSlot;
use thiserror::Error;

/// A single field-rule violation.
///
/// The `Display` strings are part of the API contract surfaced to end
/// users; changing them is a breaking change.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CandidateRuleError {
    /// The title is empty after trimming.
    #[error("Title is required")]
    TitleRequired,

    /// No owning user was supplied.
    #[error("Valid userId is required")]
    OwnerRequired,

    /// A goal reference was supplied but is not an integral number.
    #[error("goalId must be a number if provided")]
    GoalReferenceNotNumeric,

    /// The duration falls outside the persistable range.
    #[error("Duration must be between 5 and 480 minutes")]
    DurationOutOfRange,

    /// The time-slot label names no known slot.
    #[error("timeSlot must be morning, afternoon, or night")]
    UnknownTimeSlot,

    /// The specific time falls outside the assigned slot's interval.
    #[error("specificTime {time} is outside the {slot} time slot")]
    SlotMisaligned {
        /// The offending time of day, formatted as `HH:MM`.
        time: String,
        /// The slot the candidate was assigned to.
        slot: TimeSlot,
    },
}

/// Accumulated validation outcome for one candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<CandidateRuleError>,
}

impl ValidationReport {
    /// Creates a report from accumulated violations.
    #[must_use]
    pub const fn new(errors: Vec<CandidateRuleError>) -> Self {
        Self { errors }
    }

    /// Returns whether the candidate passed every rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the violations in rule order.
    #[must_use]
    pub fn errors(&self) -> &[CandidateRuleError] {
        &self.errors
    }

    /// Returns the user-facing messages in rule order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
