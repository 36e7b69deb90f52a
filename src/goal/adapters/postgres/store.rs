//! `PostgreSQL` store implementation for goal records.

use super::{
    models::{GoalRow, NewGoalRow},
    schema::goals,
};
use crate::goal::{
    domain::{Goal, GoalId, NewGoal, PersistedGoalData, UserId},
    ports::{GoalStore, GoalStoreError, GoalStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by goal adapters.
pub type GoalPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed goal store.
#[derive(Debug, Clone)]
pub struct PostgresGoalStore {
    pool: GoalPgPool,
}

impl PostgresGoalStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: GoalPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> GoalStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> GoalStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(GoalStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(GoalStoreError::persistence)?
    }
}

#[async_trait]
impl GoalStore for PostgresGoalStore {
    async fn insert(&self, goal: &NewGoal) -> GoalStoreResult<Goal> {
        let new_row = NewGoalRow {
            owner_id: goal.owner_id().value(),
            title: goal.title().to_owned(),
            description: goal.description().map(str::to_owned),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(goals::table)
                .values(&new_row)
                .get_result::<GoalRow>(connection)
                .map_err(GoalStoreError::persistence)?;
            Ok(row_to_goal(row))
        })
        .await
    }

    async fn list_for_user(&self, owner: UserId) -> GoalStoreResult<Vec<Goal>> {
        self.run_blocking(move |connection| {
            let rows = goals::table
                .filter(goals::owner_id.eq(owner.value()))
                .order(goals::id.asc())
                .select(GoalRow::as_select())
                .load::<GoalRow>(connection)
                .map_err(GoalStoreError::persistence)?;
            Ok(rows.into_iter().map(row_to_goal).collect())
        })
        .await
    }

    async fn delete(&self, id: GoalId) -> GoalStoreResult<bool> {
        // Referencing tasks are orphaned by the schema's ON DELETE SET NULL.
        self.run_blocking(move |connection| {
            let removed = diesel::delete(goals::table.find(id.value()))
                .execute(connection)
                .map_err(GoalStoreError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn row_to_goal(row: GoalRow) -> Goal {
    Goal::from_persisted(PersistedGoalData {
        id: GoalId::new(row.id),
        owner_id: UserId::new(row.owner_id),
        title: row.title,
        description: row.description,
    })
}
