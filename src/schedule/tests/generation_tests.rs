//! Orchestrator tests for the full generation pass.

use crate::goal::adapters::memory::InMemoryGoalStore;
use crate::goal::domain::{Goal, NewGoal, UserId};
use crate::goal::ports::GoalStore;
use crate::schedule::adapters::memory::{FixedPlanGenerator, InMemoryPreferenceStore};
use crate::schedule::domain::{GeneratedPlan, RawGeneratedTask, UserPreferences};
use crate::schedule::ports::{GeneratorError, GeneratorResult, ScheduleGenerator};
use crate::schedule::services::{ScheduleError, ScheduleGenerationService};
use crate::schedule::tests::support::{FixedClock, ts};
use crate::task::adapters::memory::InMemoryTaskStore;
use crate::task::domain::Task;
use crate::task::ports::TaskStore;
use async_trait::async_trait;
use mockall::mock;
use rstest::{fixture, rstest};
use std::sync::Arc;

mock! {
    Generator {}

    #[async_trait]
    impl ScheduleGenerator for Generator {
        async fn generate(
            &self,
            goals: &[Goal],
            preferences: &UserPreferences,
        ) -> GeneratorResult<GeneratedPlan>;
    }
}

struct Harness {
    goals: Arc<InMemoryGoalStore>,
    tasks: Arc<InMemoryTaskStore>,
    preferences: Arc<InMemoryPreferenceStore>,
    generator: Arc<FixedPlanGenerator>,
}

type HarnessService = ScheduleGenerationService<
    InMemoryGoalStore,
    InMemoryTaskStore,
    InMemoryPreferenceStore,
    FixedPlanGenerator,
    FixedClock,
>;

impl Harness {
    fn service(&self) -> HarnessService {
        ScheduleGenerationService::new(
            Arc::clone(&self.goals),
            Arc::clone(&self.tasks),
            Arc::clone(&self.preferences),
            Arc::clone(&self.generator),
            Arc::new(FixedClock(ts("2025-06-10T08:00:00Z"))),
        )
    }

    async fn seed_goal(&self, owner: UserId, title: &str) -> Goal {
        let goal = NewGoal::new(owner, title).expect("valid goal");
        self.goals
            .insert(&goal)
            .await
            .expect("goal insert should succeed")
    }
}

#[fixture]
fn harness() -> Harness {
    Harness {
        goals: Arc::new(InMemoryGoalStore::new()),
        tasks: Arc::new(InMemoryTaskStore::new()),
        preferences: Arc::new(InMemoryPreferenceStore::new()),
        generator: Arc::new(FixedPlanGenerator::new()),
    }
}

fn raw(title: &str, goal_id: Option<i64>) -> RawGeneratedTask {
    RawGeneratedTask {
        title: Some(title.to_owned()),
        time_slot: Some("morning".to_owned()),
        duration_minutes: Some(30),
        goal_id,
        ..RawGeneratedTask::default()
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fails_for_a_user_without_goals(harness: Harness) {
    let result = harness
        .service()
        .generate_daily_schedule(UserId::new(1))
        .await;

    assert!(matches!(result, Err(ScheduleError::NoGoals(owner)) if owner == UserId::new(1)));
    let tasks = harness
        .tasks
        .list_for_user(UserId::new(1))
        .await
        .expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fails_once_the_daily_limit_is_reached(harness: Harness) {
    let owner = UserId::new(1);
    let goal = harness.seed_goal(owner, "Learn Rust").await;
    harness
        .generator
        .set_plan(GeneratedPlan {
            tasks: vec![raw("Read the book", Some(goal.id().value()))],
            reasoning: "One step at a time.".to_owned(),
        })
        .expect("plan should be settable");
    let service = harness.service();

    service
        .generate_daily_schedule(owner)
        .await
        .expect("first pass should succeed");
    let second = service.generate_daily_schedule(owner).await;

    assert!(matches!(second, Err(ScheduleError::DailyLimitReached(o)) if o == owner));
    let tasks = harness
        .tasks
        .list_for_user(owner)
        .await
        .expect("listing should succeed");
    assert_eq!(tasks.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn surfaces_backend_failure_as_generation_failed(harness: Harness) {
    let owner = UserId::new(1);
    harness.seed_goal(owner, "Learn Rust").await;
    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .returning(|_, _| Err(GeneratorError::malformed("no JSON object in response")));

    let service = ScheduleGenerationService::new(
        Arc::clone(&harness.goals),
        Arc::clone(&harness.tasks),
        Arc::clone(&harness.preferences),
        Arc::new(generator),
        Arc::new(FixedClock(ts("2025-06-10T08:00:00Z"))),
    );
    let result = service.generate_daily_schedule(owner).await;

    assert!(matches!(
        result,
        Err(ScheduleError::GenerationFailed(
            GeneratorError::MalformedResponse(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn successful_pass_reports_saved_and_failed_counts(harness: Harness) {
    let owner = UserId::new(1);
    let goal = harness.seed_goal(owner, "Learn Rust").await;
    let mut misaligned = raw("Midnight review", Some(goal.id().value()));
    misaligned.specific_time = Some(ts("2025-06-10T23:30:00Z"));
    harness
        .generator
        .set_plan(GeneratedPlan {
            tasks: vec![
                raw("Read the book", Some(goal.id().value())),
                raw("Do the exercises", None),
                misaligned,
            ],
            reasoning: "Steady progress.".to_owned(),
        })
        .expect("plan should be settable");

    let report = harness
        .service()
        .generate_daily_schedule(owner)
        .await
        .expect("pass should succeed");

    assert_eq!(report.goals_processed, 1);
    assert_eq!(report.attempted_tasks, 3);
    assert_eq!(report.total_generated, 2);
    assert_eq!(report.failed_tasks, 1);
    assert_eq!(report.reasoning, "Steady progress.");
    let titles: Vec<&str> = report.tasks.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["Read the book", "Do the exercises"]);
    assert_eq!(
        report.tasks.first().and_then(Task::goal_id),
        Some(goal.id())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pass_with_zero_saved_tasks_is_still_a_success(harness: Harness) {
    let owner = UserId::new(1);
    let goal = harness.seed_goal(owner, "Learn Rust").await;
    let mut misaligned = raw("Midnight review", Some(goal.id().value()));
    misaligned.specific_time = Some(ts("2025-06-10T23:30:00Z"));
    harness
        .generator
        .set_plan(GeneratedPlan {
            tasks: vec![misaligned],
            reasoning: String::new(),
        })
        .expect("plan should be settable");

    let report = harness
        .service()
        .generate_daily_schedule(owner)
        .await
        .expect("pass should succeed");

    assert!(report.tasks.is_empty());
    assert_eq!(report.attempted_tasks, 1);
    assert_eq!(report.failed_tasks, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn check_daily_limit_reports_the_gate_without_generating(harness: Harness) {
    let owner = UserId::new(1);
    harness.seed_goal(owner, "Learn Rust").await;

    let status = harness
        .service()
        .check_daily_limit(owner)
        .await
        .expect("gate check should succeed");

    assert!(status.can_generate);
    let tasks = harness
        .tasks
        .list_for_user(owner)
        .await
        .expect("listing should succeed");
    assert!(tasks.is_empty());
}
