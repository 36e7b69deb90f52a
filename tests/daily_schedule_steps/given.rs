//! Given steps for daily schedule generation BDD scenarios.

use super::world::{ScheduleWorld, run_async};
use chrono::{NaiveTime, Utc};
use dayplan::goal::domain::NewGoal;
use dayplan::goal::ports::GoalStore;
use dayplan::schedule::domain::RawGeneratedTask;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a user with no goals")]
fn a_user_with_no_goals(world: &mut ScheduleWorld) {
    let _ = world;
}

#[given(r#"a user with a goal named "{title}""#)]
fn a_user_with_a_goal(world: &mut ScheduleWorld, title: String) -> Result<(), eyre::Report> {
    let goal = NewGoal::new(world.user, title).wrap_err("build goal for scenario")?;
    run_async(world.goals.insert(&goal)).wrap_err("seed goal for scenario")?;
    Ok(())
}

#[given(r#"the backend proposes a task "{title}" lasting {minutes:i64} minutes"#)]
fn backend_proposes_task(world: &mut ScheduleWorld, title: String, minutes: i64) {
    world.proposed_tasks.push(RawGeneratedTask {
        title: Some(title),
        time_slot: Some("morning".to_owned()),
        duration_minutes: Some(minutes),
        ..RawGeneratedTask::default()
    });
}

#[given(r#"the backend proposes a morning task "{title}" at "{time}""#)]
fn backend_proposes_timed_task(
    world: &mut ScheduleWorld,
    title: String,
    time: String,
) -> Result<(), eyre::Report> {
    let time_of_day =
        NaiveTime::parse_from_str(&time, "%H:%M").wrap_err("parse scenario time of day")?;
    let specific_time = Utc::now().date_naive().and_time(time_of_day).and_utc();
    world.proposed_tasks.push(RawGeneratedTask {
        title: Some(title),
        time_slot: Some("morning".to_owned()),
        specific_time: Some(specific_time),
        duration_minutes: Some(30),
        ..RawGeneratedTask::default()
    });
    Ok(())
}
