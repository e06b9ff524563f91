//! When steps for board workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;

#[when("the task is started")]
fn start_task(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let task_id = world
        .current_task_id
        .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))?;
    world.last_result = Some(run_async(world.workflow.start(world.owner_id, task_id)));
    Ok(())
}

#[when("the task is completed")]
fn complete_task(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let task_id = world
        .current_task_id
        .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))?;
    world.last_result = Some(run_async(world.workflow.complete(task_id)));
    Ok(())
}
