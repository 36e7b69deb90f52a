//! Shared fixtures for pipeline tests.

use crate::goal::domain::{Goal, GoalId, PersistedGoalData, UserId};
use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Clock frozen at a fixed UTC instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

pub fn goal(id: i64, owner: UserId, title: &str) -> Goal {
    Goal::from_persisted(PersistedGoalData {
        id: GoalId::new(id),
        owner_id: owner,
        title: title.to_owned(),
        description: None,
    })
}
