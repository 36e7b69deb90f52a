//! Diesel row models for goal persistence.

use super::schema::goals;
use diesel::prelude::*;

/// Query result row for goal records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = goals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GoalRow {
    /// Goal identifier.
    pub id: i64,
    /// Owning user identifier.
    pub owner_id: i64,
    /// Goal title.
    pub title: String,
    /// Optional goal description.
    pub description: Option<String>,
}

/// Insert model for goal records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = goals)]
pub struct NewGoalRow {
    /// Owning user identifier.
    pub owner_id: i64,
    /// Goal title.
    pub title: String,
    /// Optional goal description.
    pub description: Option<String>,
}
