//! Then steps for board workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::then;
use wipboard::board::{
    domain::{Task, TaskId, TaskStatus, WorkflowViolation},
    ports::TaskRepository,
    services::BoardWorkflowError,
};

fn fetch_task(world: &BoardWorld, task_id: TaskId) -> Result<Task, eyre::Report> {
    run_async(world.tasks.find_by_id(task_id))
        .map_err(|err| eyre::eyre!("task lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("task missing from repository"))
}

fn current_task(world: &BoardWorld) -> Result<Task, eyre::Report> {
    let task_id = world
        .current_task_id
        .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))?;
    fetch_task(world, task_id)
}

fn expect_status(task: &Task, status: &str) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status)
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    expect_status(&current_task(world)?, &status)
}

#[then(r#"the task "{title}" status is "{status}""#)]
fn named_task_status_is(
    world: &BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let task_id = world
        .task_ids_by_title
        .get(&title)
        .copied()
        .ok_or_else(|| eyre::eyre!("unknown scenario task: {title}"))?;
    expect_status(&fetch_task(world, task_id)?, &status)
}

#[then(r#"the task log ends with "{kind}""#)]
fn task_log_ends_with(world: &BoardWorld, kind: String) -> Result<(), eyre::Report> {
    let task_id = world
        .current_task_id
        .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))?;
    let log = run_async(world.workflow.recorder().log_for_task(task_id))
        .map_err(|err| eyre::eyre!("log lookup failed: {err}"))?;
    let last = log
        .last()
        .ok_or_else(|| eyre::eyre!("expected a non-empty activity log"))?;
    if last.kind().as_str() != kind {
        return Err(eyre::eyre!(
            "expected last activity {kind}, found {}",
            last.kind().as_str()
        ));
    }
    Ok(())
}

#[then("the start fails because the task is not queued for today")]
fn start_fails_not_queued(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing start result in scenario world"))?;

    if !matches!(
        result,
        Err(BoardWorkflowError::Violation(
            WorkflowViolation::NotFlaggedForToday(_)
        ))
    ) {
        return Err(eyre::eyre!(
            "expected NotFlaggedForToday violation, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the task is not queued for today")]
fn task_not_queued(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task = current_task(world)?;
    if task.is_today_task() {
        return Err(eyre::eyre!("expected the today flag to be cleared"));
    }
    Ok(())
}
