//! Given steps for board workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a task "{title}" queued for today"#)]
fn queued_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let request = world.request(&title).flagged_for_today();
    let task = run_async(world.workflow.create(request))
        .wrap_err("create queued task for scenario")?;
    world.task_ids_by_title.insert(title, task.id());
    world.current_task_id = Some(task.id());
    Ok(())
}

#[given(r#"a task "{title}" outside the today queue"#)]
fn unqueued_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task = run_async(world.workflow.create(world.request(&title)))
        .wrap_err("create unqueued task for scenario")?;
    world.task_ids_by_title.insert(title, task.id());
    world.current_task_id = Some(task.id());
    Ok(())
}

#[given("the task has been started")]
fn task_has_been_started(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let task_id = world
        .current_task_id
        .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))?;
    run_async(world.workflow.start(world.owner_id, task_id))
        .wrap_err("start task for scenario")?;
    Ok(())
}
