//! Once-per-UTC-day generation gate.

use crate::goal::domain::UserId;
use crate::schedule::domain::DailyLimitStatus;
use crate::task::ports::{TaskStore, TaskStoreResult};
use chrono::{Duration, NaiveTime};
use mockable::Clock;
use std::sync::Arc;

/// Gate message when generation is still available today.
pub const CAN_GENERATE_MESSAGE: &str = "Daily schedule generation is available.";

/// Gate message when the user has already generated a schedule today.
pub const LIMIT_REACHED_MESSAGE: &str =
    "Daily generation limit reached. A new schedule can be generated tomorrow.";

/// Enforces the once-per-UTC-day generation limit.
///
/// The gate counts generator-authored tasks created inside the current UTC
/// calendar day, `[00:00:00, +24h)`. The check-then-persist sequence is not
/// atomic; two simultaneous requests can both pass the gate, which is an
/// accepted race for this workload.
#[derive(Debug)]
pub struct DailyLimitService<T, C> {
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<T, C> DailyLimitService<T, C>
where
    T: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a gate over the given task store and clock.
    #[must_use]
    pub const fn new(tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self { tasks, clock }
    }

    /// Reports whether the user may generate a schedule today.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::ports::TaskStoreError`] when the window query
    /// fails.
    pub async fn check(&self, owner: UserId) -> TaskStoreResult<DailyLimitStatus> {
        let now = self.clock.utc();
        let start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::hours(24);

        let generated_today = self.tasks.generated_in_window(owner, start, end).await?;
        let can_generate = generated_today.is_empty();
        let message = if can_generate {
            CAN_GENERATE_MESSAGE
        } else {
            LIMIT_REACHED_MESSAGE
        };

        tracing::debug!(
            user = %owner,
            generated_today = generated_today.len(),
            can_generate,
            "daily generation gate checked"
        );

        Ok(DailyLimitStatus {
            can_generate,
            message: message.to_owned(),
        })
    }
}
