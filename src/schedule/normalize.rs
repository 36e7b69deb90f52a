//! Repair and defaulting of untrusted generator output.
//!
//! Each raw record is repaired in a fixed order: defaults, duration
//! clamping, date correction, goal-reference healing, then batch-level
//! deduplication. Candidates are repaired rather than rejected; a record is
//! only dropped when it duplicates an earlier one.

use crate::goal::domain::GoalId;
use crate::schedule::domain::RawGeneratedTask;
use crate::task::domain::{
    DEFAULT_DURATION_MINUTES, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES, TaskCandidate, TimeSlot,
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Title assigned when a generator omits one.
pub const PLACEHOLDER_TITLE: &str = "Task";

/// Normalizes a raw generator batch into well-formed candidates.
///
/// Output order is the stable first-seen input order, minus exact
/// duplicates on `(title, goal id, specific time)`. The valid goal ids are
/// the caller's snapshot of the user's goals; the first entry is the
/// healing target for unrecognized references.
#[must_use]
pub fn normalize_batch(
    raw_tasks: Vec<RawGeneratedTask>,
    valid_goal_ids: &[GoalId],
    reference_now: DateTime<Utc>,
) -> Vec<TaskCandidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::with_capacity(raw_tasks.len());

    for raw in raw_tasks {
        let candidate = normalize_record(raw, valid_goal_ids, reference_now);
        if seen.insert(candidate.dedup_key()) {
            candidates.push(candidate);
        }
    }

    candidates
}

fn normalize_record(
    raw: RawGeneratedTask,
    valid_goal_ids: &[GoalId],
    reference_now: DateTime<Utc>,
) -> TaskCandidate {
    // Only an absent title gets the placeholder; a blank-but-present title
    // is kept so the field rules can reject it downstream.
    let title = raw.title.unwrap_or_else(|| PLACEHOLDER_TITLE.to_owned());
    let slot = raw
        .time_slot
        .as_deref()
        .and_then(|label| TimeSlot::try_from(label).ok())
        .unwrap_or(TimeSlot::Morning);

    let mut candidate = TaskCandidate::new(title)
        .with_description(raw.description.unwrap_or_default())
        .with_time_slot(slot)
        .with_duration_minutes(clamp_duration(raw.duration_minutes))
        .with_fixed(raw.fixed.unwrap_or(false));

    if let Some(specific_time) = raw.specific_time {
        candidate = candidate.with_specific_time(correct_date(specific_time, reference_now));
    }
    if let Some(goal_id) = heal_goal_reference(raw.goal_id, valid_goal_ids) {
        candidate = candidate.with_goal_id(goal_id);
    }

    candidate
}

/// Clamps a proposed duration into the persistable range.
///
/// A missing duration becomes the default; out-of-range values are clamped,
/// never rejected.
#[must_use]
pub fn clamp_duration(minutes: Option<i64>) -> i32 {
    minutes.map_or(DEFAULT_DURATION_MINUTES, |raw| {
        let clamped = raw.clamp(
            i64::from(MIN_DURATION_MINUTES),
            i64::from(MAX_DURATION_MINUTES),
        );
        i32::try_from(clamped).unwrap_or(DEFAULT_DURATION_MINUTES)
    })
}

/// Rewrites a timestamp's calendar date to the reference date, preserving
/// its time of day.
///
/// Generators hallucinate stale or future dates; only the year-month-day
/// portion is corrected, and a timestamp already on the reference date is
/// returned unchanged.
#[must_use]
pub fn correct_date(timestamp: DateTime<Utc>, reference_now: DateTime<Utc>) -> DateTime<Utc> {
    if timestamp.date_naive() == reference_now.date_naive() {
        return timestamp;
    }
    reference_now
        .date_naive()
        .and_time(timestamp.time())
        .and_utc()
}

/// Replaces a goal reference outside the valid set with the first valid
/// goal id. A candidate is never dropped for an invalid reference.
fn heal_goal_reference(goal_id: Option<i64>, valid_goal_ids: &[GoalId]) -> Option<GoalId> {
    match goal_id.map(GoalId::new) {
        Some(id) if valid_goal_ids.contains(&id) => Some(id),
        _ => valid_goal_ids.first().copied(),
    }
}
