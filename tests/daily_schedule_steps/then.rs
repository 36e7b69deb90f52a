//! Then steps for daily schedule generation BDD scenarios.

use super::world::ScheduleWorld;
use dayplan::schedule::services::ScheduleError;
use rstest_bdd_macros::then;

#[then("generation fails because the user has no goals")]
fn fails_with_no_goals(world: &ScheduleWorld) -> Result<(), eyre::Report> {
    let result = world
        .results
        .last()
        .ok_or_else(|| eyre::eyre!("no generation pass has run yet"))?;
    if !matches!(result, Err(ScheduleError::NoGoals(_))) {
        return Err(eyre::eyre!("expected a no-goals failure, got {result:?}"));
    }
    Ok(())
}

#[then("the second generation fails because the daily limit is reached")]
fn second_pass_hits_daily_limit(world: &ScheduleWorld) -> Result<(), eyre::Report> {
    let result = world
        .results
        .get(1)
        .ok_or_else(|| eyre::eyre!("expected two generation passes"))?;
    if !matches!(result, Err(ScheduleError::DailyLimitReached(_))) {
        return Err(eyre::eyre!("expected a daily-limit failure, got {result:?}"));
    }
    Ok(())
}

#[then("{count:usize} tasks are saved")]
fn tasks_are_saved(world: &ScheduleWorld, count: usize) -> Result<(), eyre::Report> {
    let report = world.last_report()?;
    if report.tasks.len() != count {
        return Err(eyre::eyre!(
            "expected {count} saved tasks, found {}",
            report.tasks.len()
        ));
    }
    Ok(())
}

#[then("{count:usize} tasks are rejected")]
fn tasks_are_rejected(world: &ScheduleWorld, count: usize) -> Result<(), eyre::Report> {
    let report = world.last_report()?;
    if report.failed_tasks != count {
        return Err(eyre::eyre!(
            "expected {count} rejected tasks, found {}",
            report.failed_tasks
        ));
    }
    Ok(())
}

#[then(r#"the saved task "{title}" lasts {minutes:i32} minutes"#)]
fn saved_task_lasts(world: &ScheduleWorld, title: String, minutes: i32) -> Result<(), eyre::Report> {
    let report = world.last_report()?;
    let task = report
        .tasks
        .iter()
        .find(|task| task.title() == title)
        .ok_or_else(|| eyre::eyre!("expected a saved task titled '{title}'"))?;
    if task.duration_minutes() != Some(minutes) {
        return Err(eyre::eyre!(
            "expected '{title}' to last {minutes} minutes, found {:?}",
            task.duration_minutes()
        ));
    }
    Ok(())
}
