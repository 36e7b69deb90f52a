//! Diesel row models for preference persistence.

use super::schema::user_preferences;
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for preference records.
///
/// The owning user id is a filter input, never an output, so the
/// projection covers only the columns the domain mapping reads.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_preferences)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PreferenceRow {
    /// Free-text user context.
    pub user_context: String,
    /// Preferred time slots as a JSON array of slot labels.
    pub preferred_time_slots: Value,
}
