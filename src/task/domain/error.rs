//! Error types for task domain parsing.

use thiserror::Error;

/// Error returned while parsing time-slot labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown time slot: {0}")]
pub struct ParseTimeSlotError(pub String);
