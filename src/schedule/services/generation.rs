//! Root orchestrator for daily schedule generation.

use crate::goal::domain::{Goal, UserId};
use crate::goal::ports::{GoalStore, GoalStoreError};
use crate::schedule::domain::{DailyLimitStatus, ScheduleReport};
use crate::schedule::normalize::normalize_batch;
use crate::schedule::ports::{
    GeneratorError, PreferenceStore, PreferenceStoreError, ScheduleGenerator,
};
use crate::schedule::services::{DailyLimitService, SchedulePersistenceService};
use crate::task::ports::{TaskStore, TaskStoreError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Result type for schedule generation operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors returned by the generation pipeline.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The user owns no goals, so there is nothing to schedule around.
    #[error("user {0} has no goals to generate a schedule for")]
    NoGoals(UserId),

    /// The user already generated a schedule today.
    #[error("user {0} has reached the daily generation limit")]
    DailyLimitReached(UserId),

    /// The generation backend failed or answered unparseably.
    #[error("schedule generation failed: {0}")]
    GenerationFailed(#[from] GeneratorError),

    /// Goal retrieval failed.
    #[error(transparent)]
    GoalStore(#[from] GoalStoreError),

    /// Task persistence or gate query failed.
    #[error(transparent)]
    TaskStore(#[from] TaskStoreError),

    /// Preference retrieval failed.
    #[error(transparent)]
    PreferenceStore(#[from] PreferenceStoreError),
}

/// Orchestrates one daily-schedule generation pass.
///
/// The pass runs in a fixed order: load goals, check the daily gate, load
/// preferences, invoke the backend, normalize its output, then persist each
/// candidate independently. Terminal conditions surface as
/// [`ScheduleError`]; a pass that persists zero tasks is still a success.
#[derive(Debug)]
pub struct ScheduleGenerationService<G, T, P, X, C> {
    goals: Arc<G>,
    preferences: Arc<P>,
    generator: Arc<X>,
    gate: DailyLimitService<T, C>,
    writer: SchedulePersistenceService<T, C>,
    clock: Arc<C>,
}

impl<G, T, P, X, C> ScheduleGenerationService<G, T, P, X, C>
where
    G: GoalStore,
    T: TaskStore,
    P: PreferenceStore,
    X: ScheduleGenerator,
    C: Clock + Send + Sync,
{
    /// Wires the pipeline from its stores, backend, and clock.
    #[must_use]
    pub fn new(
        goals: Arc<G>,
        tasks: Arc<T>,
        preferences: Arc<P>,
        generator: Arc<X>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            goals,
            preferences,
            generator,
            gate: DailyLimitService::new(Arc::clone(&tasks), Arc::clone(&clock)),
            writer: SchedulePersistenceService::new(tasks, Arc::clone(&clock)),
            clock,
        }
    }

    /// Runs one full generation pass for the user.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::NoGoals`] when the user owns no goals,
    /// [`ScheduleError::DailyLimitReached`] when a schedule was already
    /// generated today, [`ScheduleError::GenerationFailed`] when the backend
    /// fails, and store errors when retrieval or the gate query fails.
    /// Per-candidate validation and persistence failures never fail the
    /// pass; they are counted in the report instead.
    pub async fn generate_daily_schedule(&self, owner: UserId) -> ScheduleResult<ScheduleReport> {
        let goals = self.goals.list_for_user(owner).await?;
        if goals.is_empty() {
            return Err(ScheduleError::NoGoals(owner));
        }

        let gate = self.gate.check(owner).await?;
        if !gate.can_generate {
            return Err(ScheduleError::DailyLimitReached(owner));
        }

        let preferences = self
            .preferences
            .find_for_user(owner)
            .await?
            .unwrap_or_default();

        let plan = self.generator.generate(&goals, &preferences).await?;
        tracing::info!(
            user = %owner,
            goals = goals.len(),
            raw_tasks = plan.tasks.len(),
            "generation backend returned a plan"
        );

        let goal_ids: Vec<_> = goals.iter().map(Goal::id).collect();
        let candidates = normalize_batch(plan.tasks, &goal_ids, self.clock.utc());
        let attempted = candidates.len();

        let outcome = self.writer.persist(candidates, owner, &goal_ids).await;
        let saved = outcome.saved.len();

        tracing::info!(
            user = %owner,
            attempted,
            saved,
            failed = outcome.failed.len(),
            "daily schedule generation finished"
        );

        Ok(ScheduleReport {
            tasks: outcome.saved,
            reasoning: plan.reasoning,
            total_generated: saved,
            goals_processed: goals.len(),
            attempted_tasks: attempted,
            failed_tasks: attempted.saturating_sub(saved),
        })
    }

    /// Reports the daily gate state without running a generation pass.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::TaskStore`] when the gate query fails.
    pub async fn check_daily_limit(&self, owner: UserId) -> ScheduleResult<DailyLimitStatus> {
        Ok(self.gate.check(owner).await?)
    }
}
