//! Domain model for tasks and time-of-day scheduling.
//!
//! The task domain models candidate proposals, persisted tasks, and the
//! half-open minute-of-day slot arithmetic while keeping all infrastructure
//! concerns outside of the domain boundary.

mod candidate;
mod error;
mod ids;
mod task;
mod time_slot;

pub use candidate::{
    DEFAULT_DURATION_MINUTES, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES, TaskCandidate,
};
pub use error::ParseTimeSlotError;
pub use ids::TaskId;
pub use task::{NewTask, PersistedTaskData, Task};
pub use time_slot::{
    TimeSlot, format_minute_of_day, is_within_slot, is_within_slot_label, minute_of_day,
};
