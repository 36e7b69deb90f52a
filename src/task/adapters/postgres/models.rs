//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Owning user identifier.
    pub owner_id: i64,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Coarse time-of-day slot label.
    pub time_slot: Option<String>,
    /// Specific scheduled time.
    pub specific_time: Option<DateTime<Utc>>,
    /// Duration in minutes.
    pub duration_minutes: Option<i32>,
    /// Referenced goal identifier.
    pub goal_id: Option<i64>,
    /// Whether the task is fixed in time.
    pub fixed: bool,
    /// Completion flag.
    pub completed: bool,
    /// Whether the task was authored by the generation pipeline.
    pub ai_generated: bool,
    /// Whether the task passed pipeline validation before persistence.
    pub ai_validated: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning user identifier.
    pub owner_id: i64,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Coarse time-of-day slot label.
    pub time_slot: Option<String>,
    /// Specific scheduled time.
    pub specific_time: Option<DateTime<Utc>>,
    /// Duration in minutes.
    pub duration_minutes: Option<i32>,
    /// Referenced goal identifier.
    pub goal_id: Option<i64>,
    /// Whether the task is fixed in time.
    pub fixed: bool,
    /// Completion flag.
    pub completed: bool,
    /// Whether the task was authored by the generation pipeline.
    pub ai_generated: bool,
    /// Whether the task passed pipeline validation before persistence.
    pub ai_validated: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
