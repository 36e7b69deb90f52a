//! When steps for daily schedule generation BDD scenarios.

use super::world::{ScheduleWorld, run_async};
use dayplan::schedule::domain::GeneratedPlan;
use rstest_bdd_macros::when;

fn run_generation(world: &mut ScheduleWorld) -> Result<(), eyre::Report> {
    world
        .generator
        .set_plan(GeneratedPlan {
            tasks: world.proposed_tasks.clone(),
            reasoning: "Scenario plan.".to_owned(),
        })
        .map_err(|err| eyre::eyre!("configure backend double: {err}"))?;
    let result = run_async(world.service.generate_daily_schedule(world.user));
    world.results.push(result);
    Ok(())
}

#[when("a daily schedule is generated")]
fn a_daily_schedule_is_generated(world: &mut ScheduleWorld) -> Result<(), eyre::Report> {
    run_generation(world)
}

#[when("a second daily schedule is generated")]
fn a_second_daily_schedule_is_generated(world: &mut ScheduleWorld) -> Result<(), eyre::Report> {
    run_generation(world)
}
