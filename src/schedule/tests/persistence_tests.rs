//! Batch persistence tests: partial failure never aborts the pass.

use crate::goal::domain::{GoalId, UserId};
use crate::schedule::services::SchedulePersistenceService;
use crate::schedule::tests::support::{FixedClock, ts};
use crate::task::adapters::memory::InMemoryTaskStore;
use crate::task::domain::{NewTask, Task, TaskCandidate, TaskId, TimeSlot};
use crate::task::ports::{TaskStore, TaskStoreError, TaskStoreResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use rstest::rstest;
use std::sync::Arc;

mock! {
    TaskStoreDouble {}

    #[async_trait]
    impl TaskStore for TaskStoreDouble {
        async fn insert(&self, task: &NewTask) -> TaskStoreResult<Task>;
        async fn generated_in_window(
            &self,
            owner: UserId,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> TaskStoreResult<Vec<Task>>;
        async fn list_for_user(&self, owner: UserId) -> TaskStoreResult<Vec<Task>>;
        async fn find_by_id(&self, owner: UserId, id: TaskId) -> TaskStoreResult<Option<Task>>;
    }
}

fn service<T: TaskStore>(store: Arc<T>) -> SchedulePersistenceService<T, FixedClock> {
    SchedulePersistenceService::new(store, Arc::new(FixedClock(ts("2025-06-10T08:00:00Z"))))
}

fn valid(title: &str) -> TaskCandidate {
    TaskCandidate::new(title)
        .with_time_slot(TimeSlot::Morning)
        .with_duration_minutes(30)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn persists_every_valid_candidate_in_order() {
    let store = Arc::new(InMemoryTaskStore::new());
    let outcome = service(Arc::clone(&store))
        .persist(vec![valid("First"), valid("Second")], UserId::new(1), &[])
        .await;

    let titles: Vec<&str> = outcome.saved.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["First", "Second"]);
    assert!(outcome.failed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn validation_failure_records_the_candidate_and_continues() {
    let store = Arc::new(InMemoryTaskStore::new());
    let misaligned = valid("Late breakfast").with_specific_time(ts("2025-06-10T13:00:00Z"));

    let outcome = service(Arc::clone(&store))
        .persist(vec![misaligned, valid("Walk")], UserId::new(1), &[])
        .await;

    assert_eq!(outcome.saved.len(), 1);
    assert_eq!(
        outcome.saved.first().map(Task::title),
        Some("Walk")
    );
    let failure = outcome.failed.first().expect("one failure");
    assert_eq!(failure.candidate.title(), "Late breakfast");
    assert_eq!(
        failure.errors,
        vec!["specificTime 13:00 is outside the morning time slot".to_owned()]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_goal_reference_is_recorded_not_saved() {
    let store = Arc::new(InMemoryTaskStore::new());
    let owned = valid("Review notes").with_goal_id(GoalId::new(7));
    let foreign = valid("Stray errand").with_goal_id(GoalId::new(999));

    let outcome = service(Arc::clone(&store))
        .persist(vec![foreign, owned], UserId::new(1), &[GoalId::new(7)])
        .await;

    let titles: Vec<&str> = outcome.saved.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["Review notes"]);
    let failure = outcome.failed.first().expect("one failure");
    assert_eq!(failure.candidate.title(), "Stray errand");
    assert_eq!(
        failure.errors,
        vec!["goalId 999 does not reference one of the user's goals".to_owned()]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_fails_the_title_rule() {
    let store = Arc::new(InMemoryTaskStore::new());
    let blank = TaskCandidate::new("   ")
        .with_time_slot(TimeSlot::Morning)
        .with_duration_minutes(30);

    let outcome = service(Arc::clone(&store))
        .persist(vec![blank], UserId::new(1), &[])
        .await;

    assert!(outcome.saved.is_empty());
    let failure = outcome.failed.first().expect("one failure");
    assert_eq!(failure.errors, vec!["Title is required".to_owned()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn persisted_tasks_carry_the_generation_flags() {
    let store = Arc::new(InMemoryTaskStore::new());
    let outcome = service(Arc::clone(&store))
        .persist(vec![valid("Flagged")], UserId::new(1), &[])
        .await;

    let task = outcome.saved.first().expect("one task");
    assert!(task.ai_generated());
    assert!(task.ai_validated());
    assert!(!task.completed());
    assert_eq!(task.created_at(), ts("2025-06-10T08:00:00Z"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_failure_records_the_candidate_and_continues() {
    let mut store = MockTaskStoreDouble::new();
    let mut calls = 0_u32;
    store.expect_insert().times(2).returning(move |task| {
        calls += 1;
        if calls == 1 {
            Err(TaskStoreError::Constraint("owner does not exist".to_owned()))
        } else {
            Ok(persisted_from(task))
        }
    });

    let outcome = service(Arc::new(store))
        .persist(vec![valid("Rejected"), valid("Accepted")], UserId::new(1), &[])
        .await;

    assert_eq!(outcome.saved.len(), 1);
    let failure = outcome.failed.first().expect("one failure");
    assert_eq!(failure.candidate.title(), "Rejected");
    assert_eq!(
        failure.errors,
        vec!["constraint violation: owner does not exist".to_owned()]
    );
}

fn persisted_from(task: &NewTask) -> Task {
    Task::from_persisted(crate::task::domain::PersistedTaskData {
        id: crate::task::domain::TaskId::new(1),
        owner_id: task.owner_id,
        title: task.title.clone(),
        description: task.description.clone(),
        time_slot: task.time_slot,
        specific_time: task.specific_time,
        duration_minutes: task.duration_minutes,
        goal_id: task.goal_id,
        fixed: task.fixed,
        completed: task.completed,
        ai_generated: task.ai_generated,
        ai_validated: task.ai_validated,
        created_at: task.created_at,
        updated_at: task.updated_at,
    })
}
