//! `PostgreSQL` store implementation for task records.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::goal::domain::{GoalId, UserId};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TimeSlot},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
///
/// Each insert is issued as its own statement with no surrounding
/// transaction, so a rejected row never rolls back earlier rows of the same
/// generation batch.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn insert(&self, task: &NewTask) -> TaskStoreResult<Task> {
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .get_result::<TaskRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(
                        DatabaseErrorKind::UniqueViolation
                        | DatabaseErrorKind::ForeignKeyViolation
                        | DatabaseErrorKind::CheckViolation,
                        info,
                    ) => TaskStoreError::Constraint(info.message().to_owned()),
                    _ => TaskStoreError::persistence(err),
                })?;
            row_to_task(row)
        })
        .await
    }

    async fn generated_in_window(
        &self,
        owner: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner.value()))
                .filter(tasks::ai_generated.eq(true))
                .filter(tasks::created_at.ge(start))
                .filter(tasks::created_at.lt(end))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_for_user(&self, owner: UserId) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, owner: UserId, id: TaskId) -> TaskStoreResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .filter(tasks::owner_id.eq(owner.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        owner_id: task.owner_id.value(),
        title: task.title.clone(),
        description: task.description.clone(),
        time_slot: task.time_slot.map(|slot| slot.as_str().to_owned()),
        specific_time: task.specific_time,
        duration_minutes: task.duration_minutes,
        goal_id: task.goal_id.map(GoalId::value),
        fixed: task.fixed,
        completed: task.completed,
        ai_generated: task.ai_generated,
        ai_validated: task.ai_validated,
        created_at: task.created_at,
        updated_at: task.updated_at,
    }
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let time_slot = row
        .time_slot
        .as_deref()
        .map(TimeSlot::try_from)
        .transpose()
        .map_err(TaskStoreError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(row.id),
        owner_id: UserId::new(row.owner_id),
        title: row.title,
        description: row.description,
        time_slot,
        specific_time: row.specific_time,
        duration_minutes: row.duration_minutes,
        goal_id: row.goal_id.map(GoalId::new),
        fixed: row.fixed,
        completed: row.completed,
        ai_generated: row.ai_generated,
        ai_validated: row.ai_validated,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
