//! Minute-of-day arithmetic and time-slot classification.
//!
//! Slots are half-open minute-of-day intervals: morning is `[270, 720)`,
//! afternoon is `[720, 1080)`, and night covers the remainder of the day
//! (`[1080, 1440)` and `[0, 270)`). The boundary minute 720 belongs to the
//! afternoon.

use super::ParseTimeSlotError;
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First minute of the morning slot.
const MORNING_START: u32 = 270;
/// First minute of the afternoon slot, exclusive end of the morning slot.
const AFTERNOON_START: u32 = 720;
/// First minute of the night slot, exclusive end of the afternoon slot.
const NIGHT_START: u32 = 1080;

/// Coarse time-of-day bucket for task scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    /// Minutes `[270, 720)` (04:30 to 12:00).
    Morning,
    /// Minutes `[720, 1080)` (12:00 to 18:00).
    Afternoon,
    /// Minutes `[1080, 1440)` and `[0, 270)` (18:00 to 04:30).
    Night,
}

impl TimeSlot {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Night => "night",
        }
    }

    /// Classifies a minute of day into its slot.
    #[must_use]
    pub const fn classify(minute: u32) -> Self {
        match minute {
            MORNING_START..AFTERNOON_START => Self::Morning,
            AFTERNOON_START..NIGHT_START => Self::Afternoon,
            _ => Self::Night,
        }
    }

    /// Returns whether the given minute of day falls inside this slot.
    #[must_use]
    pub const fn contains(self, minute: u32) -> bool {
        match self {
            Self::Morning => minute >= MORNING_START && minute < AFTERNOON_START,
            Self::Afternoon => minute >= AFTERNOON_START && minute < NIGHT_START,
            Self::Night => minute >= NIGHT_START || minute < MORNING_START,
        }
    }
}

impl TryFrom<&str> for TimeSlot {
    type Error = ParseTimeSlotError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "night" => Ok(Self::Night),
            _ => Err(ParseTimeSlotError(value.to_owned())),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the minute of day (`hour * 60 + minute`, 0–1439) of a timestamp.
#[must_use]
pub fn minute_of_day(timestamp: &DateTime<Utc>) -> u32 {
    timestamp.hour() * 60 + timestamp.minute()
}

/// Returns whether a timestamp is consistent with a slot assignment.
///
/// Validation is skipped, not failed, when data is absent: a missing slot or
/// a missing timestamp is vacuously valid.
#[must_use]
pub fn is_within_slot(slot: Option<TimeSlot>, timestamp: Option<&DateTime<Utc>>) -> bool {
    match (slot, timestamp) {
        (Some(slot), Some(timestamp)) => slot.contains(minute_of_day(timestamp)),
        _ => true,
    }
}

/// Returns whether a timestamp is consistent with a raw slot label.
///
/// A missing label or timestamp is vacuously valid, mirroring
/// [`is_within_slot`]; a label that names no known slot is invalid.
#[must_use]
pub fn is_within_slot_label(label: Option<&str>, timestamp: Option<&DateTime<Utc>>) -> bool {
    match label {
        None => true,
        Some(label) => match TimeSlot::try_from(label) {
            Ok(slot) => is_within_slot(Some(slot), timestamp),
            Err(_) => false,
        },
    }
}

/// Formats a minute of day as a zero-padded 24-hour `HH:MM` string.
#[must_use]
pub fn format_minute_of_day(minute: u32) -> String {
    let hours = minute.div_euclid(60);
    let minutes = minute.rem_euclid(60);
    format!("{hours:02}:{minutes:02}")
}
