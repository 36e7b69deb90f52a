//! Individual validation rule implementations.
//!
//! Each rule is implemented as a pure function that validates a specific
//! field of a task candidate. Rules return `Ok(())` on success or a specific
//! `CandidateRuleError` on failure. Rules never consult storage: goal
//! *existence* is the persistence layer's concern, not a field rule.

use crate::goal::domain::UserId;
use crate::task::domain::{
    MAX_DURATION_MINUTES, MIN_DURATION_MINUTES, TimeSlot, format_minute_of_day, minute_of_day,
};
use crate::task::validation::report::CandidateRuleError;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Validates that the title is non-empty after trimming.
///
/// # Errors
///
/// Returns [`CandidateRuleError::TitleRequired`] when the title is blank.
pub fn validate_title(title: &str) -> Result<(), CandidateRuleError> {
    if title.trim().is_empty() {
        return Err(CandidateRuleError::TitleRequired);
    }
    Ok(())
}

/// Validates that an owning user is present.
///
/// # Errors
///
/// Returns [`CandidateRuleError::OwnerRequired`] when no owner is supplied.
pub const fn validate_owner(owner: Option<UserId>) -> Result<(), CandidateRuleError> {
    if owner.is_none() {
        return Err(CandidateRuleError::OwnerRequired);
    }
    Ok(())
}

/// Validates a raw goal reference from an untrusted payload.
///
/// Absent and explicitly-null references are acceptable; a present value
/// must be an integral number. Whether the goal actually exists is checked
/// at persistence time.
///
/// # Errors
///
/// Returns [`CandidateRuleError::GoalReferenceNotNumeric`] for any other
/// value shape.
pub fn validate_goal_reference(goal_ref: Option<&Value>) -> Result<(), CandidateRuleError> {
    match goal_ref {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Number(number)) if number.as_i64().is_some() => Ok(()),
        Some(_) => Err(CandidateRuleError::GoalReferenceNotNumeric),
    }
}

/// Validates that a duration, when present, lies in the persistable range.
///
/// # Errors
///
/// Returns [`CandidateRuleError::DurationOutOfRange`] when the duration is
/// outside `[5, 480]` minutes.
pub const fn validate_duration(duration_minutes: Option<i64>) -> Result<(), CandidateRuleError> {
    if let Some(minutes) = duration_minutes
        && (minutes < MIN_DURATION_MINUTES as i64 || minutes > MAX_DURATION_MINUTES as i64)
    {
        return Err(CandidateRuleError::DurationOutOfRange);
    }
    Ok(())
}

/// Validates a raw time-slot label from an untrusted payload.
///
/// # Errors
///
/// Returns [`CandidateRuleError::UnknownTimeSlot`] when the label names no
/// known slot.
pub fn validate_time_slot_label(label: Option<&str>) -> Result<(), CandidateRuleError> {
    if let Some(label) = label
        && TimeSlot::try_from(label).is_err()
    {
        return Err(CandidateRuleError::UnknownTimeSlot);
    }
    Ok(())
}

/// Validates that a specific time falls inside the assigned slot.
///
/// Skipped (valid) when either the slot or the time is absent; slots are
/// half-open intervals, so a morning task at exactly 12:00 is rejected.
///
/// # Errors
///
/// Returns [`CandidateRuleError::SlotMisaligned`] naming the formatted time
/// and the slot.
pub fn validate_slot_alignment(
    slot: Option<TimeSlot>,
    specific_time: Option<&DateTime<Utc>>,
) -> Result<(), CandidateRuleError> {
    if let (Some(slot), Some(specific_time)) = (slot, specific_time) {
        let minute = minute_of_day(specific_time);
        if !slot.contains(minute) {
            return Err(CandidateRuleError::SlotMisaligned {
                time: format_minute_of_day(minute),
                slot,
            });
        }
    }
    Ok(())
}
