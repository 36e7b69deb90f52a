//! Partial-failure batch persistence of validated candidates.

use crate::goal::domain::{GoalId, UserId};
use crate::schedule::domain::{BatchOutcome, FailedCandidate};
use crate::task::domain::{NewTask, TaskCandidate};
use crate::task::ports::TaskStore;
use crate::task::validation::validate_candidate;
use mockable::Clock;
use std::sync::Arc;

/// Persists a candidate batch one row at a time.
///
/// Each candidate is validated and inserted as its own unit of work; a
/// validation or store failure records the candidate and its reasons,
/// then the pass continues with the next candidate. Goal references are
/// checked against the caller's snapshot of the user's goal ids, since
/// the field rules have no store access.
#[derive(Debug)]
pub struct SchedulePersistenceService<T, C> {
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<T, C> SchedulePersistenceService<T, C>
where
    T: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a persistence pass over the given task store and clock.
    #[must_use]
    pub const fn new(tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self { tasks, clock }
    }

    /// Validates and persists each candidate, collecting successes and
    /// failures independently.
    pub async fn persist(
        &self,
        candidates: Vec<TaskCandidate>,
        owner: UserId,
        valid_goal_ids: &[GoalId],
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for candidate in candidates {
            let report = validate_candidate(&candidate, Some(owner));
            if !report.is_valid() {
                tracing::warn!(
                    user = %owner,
                    title = candidate.title(),
                    errors = ?report.messages(),
                    "candidate rejected by validation"
                );
                outcome.failed.push(FailedCandidate {
                    errors: report.messages(),
                    candidate,
                });
                continue;
            }

            let foreign_goal = candidate
                .goal_id()
                .filter(|id| !valid_goal_ids.contains(id));
            if let Some(goal_id) = foreign_goal {
                tracing::warn!(
                    user = %owner,
                    title = candidate.title(),
                    goal = %goal_id,
                    "candidate references a goal the user does not own"
                );
                outcome.failed.push(FailedCandidate {
                    errors: vec![format!(
                        "goalId {goal_id} does not reference one of the user's goals"
                    )],
                    candidate,
                });
                continue;
            }

            let new_task = NewTask::generated(candidate.clone(), owner, self.clock.as_ref());
            match self.tasks.insert(&new_task).await {
                Ok(task) => outcome.saved.push(task),
                Err(err) => {
                    tracing::warn!(
                        user = %owner,
                        title = candidate.title(),
                        error = %err,
                        "candidate rejected by the store"
                    );
                    outcome.failed.push(FailedCandidate {
                        errors: vec![err.to_string()],
                        candidate,
                    });
                }
            }
        }

        tracing::debug!(
            user = %owner,
            saved = outcome.saved.len(),
            failed = outcome.failed.len(),
            "batch persistence pass finished"
        );
        outcome
    }
}
