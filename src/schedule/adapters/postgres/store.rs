//! `PostgreSQL` store implementation for preference records.

use super::{models::PreferenceRow, schema::user_preferences};
use crate::goal::domain::UserId;
use crate::schedule::{
    domain::UserPreferences,
    ports::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult},
};
use crate::task::domain::TimeSlot;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use std::collections::BTreeSet;

/// `PostgreSQL` connection pool type used by preference adapters.
pub type PreferencePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed preference store.
#[derive(Debug, Clone)]
pub struct PostgresPreferenceStore {
    pool: PreferencePgPool,
}

impl PostgresPreferenceStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PreferencePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PreferenceStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> PreferenceStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(PreferenceStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(PreferenceStoreError::persistence)?
    }
}

#[async_trait]
impl PreferenceStore for PostgresPreferenceStore {
    async fn find_for_user(&self, owner: UserId) -> PreferenceStoreResult<Option<UserPreferences>> {
        self.run_blocking(move |connection| {
            let row = user_preferences::table
                .filter(user_preferences::user_id.eq(owner.value()))
                .select(PreferenceRow::as_select())
                .first::<PreferenceRow>(connection)
                .optional()
                .map_err(PreferenceStoreError::persistence)?;
            row.map(row_to_preferences).transpose()
        })
        .await
    }
}

fn row_to_preferences(row: PreferenceRow) -> PreferenceStoreResult<UserPreferences> {
    let slots: BTreeSet<TimeSlot> = serde_json::from_value(row.preferred_time_slots)
        .map_err(PreferenceStoreError::persistence)?;
    Ok(UserPreferences::new(row.user_context).with_preferred_slots(slots))
}
