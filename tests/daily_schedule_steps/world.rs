//! Shared world state for daily schedule generation BDD scenarios.

use std::sync::Arc;

use dayplan::goal::{adapters::memory::InMemoryGoalStore, domain::UserId};
use dayplan::schedule::{
    adapters::memory::{FixedPlanGenerator, InMemoryPreferenceStore},
    domain::{RawGeneratedTask, ScheduleReport},
    services::{ScheduleGenerationService, ScheduleResult},
};
use dayplan::task::adapters::memory::InMemoryTaskStore;
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestScheduleService = ScheduleGenerationService<
    InMemoryGoalStore,
    InMemoryTaskStore,
    InMemoryPreferenceStore,
    FixedPlanGenerator,
    DefaultClock,
>;

/// Scenario world for daily schedule generation behaviour tests.
pub struct ScheduleWorld {
    /// Goal store backing the scenario.
    pub goals: Arc<InMemoryGoalStore>,
    /// Generation backend double.
    pub generator: Arc<FixedPlanGenerator>,
    /// The pipeline under test.
    pub service: TestScheduleService,
    /// The user the scenario runs as.
    pub user: UserId,
    /// Raw tasks the backend will propose.
    pub proposed_tasks: Vec<RawGeneratedTask>,
    /// Results of generation passes, in invocation order.
    pub results: Vec<ScheduleResult<ScheduleReport>>,
}

impl ScheduleWorld {
    /// Creates a world with empty stores and an empty proposal.
    #[must_use]
    pub fn new() -> Self {
        let goals = Arc::new(InMemoryGoalStore::new());
        let generator = Arc::new(FixedPlanGenerator::new());
        let service = ScheduleGenerationService::new(
            Arc::clone(&goals),
            Arc::new(InMemoryTaskStore::new()),
            Arc::new(InMemoryPreferenceStore::new()),
            Arc::clone(&generator),
            Arc::new(DefaultClock),
        );
        Self {
            goals,
            generator,
            service,
            user: UserId::new(1),
            proposed_tasks: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Returns the report of the most recent successful pass.
    pub fn last_report(&self) -> Result<&ScheduleReport, eyre::Report> {
        match self.results.last() {
            Some(Ok(report)) => Ok(report),
            Some(Err(err)) => Err(eyre::eyre!("last generation pass failed: {err}")),
            None => Err(eyre::eyre!("no generation pass has run yet")),
        }
    }
}

impl Default for ScheduleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ScheduleWorld {
    ScheduleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
