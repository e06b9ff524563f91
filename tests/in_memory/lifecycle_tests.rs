//! In-memory integration tests covering full workflow runs.

use rstest::rstest;
use wipboard::board::{
    domain::{ActivityKind, TaskStatus},
    services::{DEFAULT_WINDOW_DAYS, EditTaskRequest, SortDirection},
};

use super::helpers::{Board, board, request};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_task_runs_from_creation_to_completion(board: Board) {
    let task = board
        .workflow
        .create(request(board.owner_id, "Write the launch note").flagged_for_today())
        .await
        .expect("task creation should succeed");

    board
        .workflow
        .start(board.owner_id, task.id())
        .await
        .expect("start should succeed");
    board
        .workflow
        .hold(task.id())
        .await
        .expect("hold should succeed");
    board
        .workflow
        .start(board.owner_id, task.id())
        .await
        .expect("restart should succeed");
    let finished = board
        .workflow
        .complete(task.id())
        .await
        .expect("complete should succeed");

    assert_eq!(finished.status(), TaskStatus::Completed);
    assert!(!finished.is_today_task());

    let kinds: Vec<ActivityKind> = board
        .workflow
        .recorder()
        .log_for_task(task.id())
        .await
        .expect("log lookup should succeed")
        .iter()
        .map(|activity| activity.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            ActivityKind::Created,
            ActivityKind::AddedToToday,
            ActivityKind::Started,
            ActivityKind::OnHold,
            ActivityKind::Resumed,
            ActivityKind::Completed,
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_completed_task_moves_between_projections(board: Board) {
    let task = board
        .workflow
        .create(request(board.owner_id, "Write the launch note").flagged_for_today())
        .await
        .expect("task creation should succeed");

    let queued = board
        .queries
        .today(board.owner_id)
        .await
        .expect("projection should succeed");
    assert_eq!(queued.len(), 1);

    board
        .workflow
        .start(board.owner_id, task.id())
        .await
        .expect("start should succeed");
    board
        .workflow
        .complete(task.id())
        .await
        .expect("complete should succeed");

    let queued_after = board
        .queries
        .today(board.owner_id)
        .await
        .expect("projection should succeed");
    assert!(queued_after.is_empty());

    let recent = board
        .queries
        .recently_completed(board.owner_id, DEFAULT_WINDOW_DAYS)
        .await
        .expect("projection should succeed");
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].task.id(), task.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_edit_is_visible_through_the_status_projection(board: Board) {
    let task = board
        .workflow
        .create(request(board.owner_id, "Write the launch note"))
        .await
        .expect("task creation should succeed");

    board
        .workflow
        .edit(
            task.id(),
            EditTaskRequest::new()
                .with_title("Write and review the launch note")
                .with_estimated_effort(90),
        )
        .await
        .expect("edit should succeed");

    let pending = board
        .queries
        .by_status(
            board.owner_id,
            &[TaskStatus::NotStarted],
            SortDirection::Ascending,
        )
        .await
        .expect("projection should succeed");
    assert_eq!(pending.len(), 1);
    assert_eq!(
        pending[0].task.title().as_str(),
        "Write and review the launch note"
    );
    assert_eq!(pending[0].task.estimated_effort().minutes(), 90);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_deleted_task_vanishes_from_every_projection(board: Board) {
    let task = board
        .workflow
        .create(request(board.owner_id, "Write the launch note").flagged_for_today())
        .await
        .expect("task creation should succeed");

    board
        .workflow
        .delete(task.id())
        .await
        .expect("delete should succeed");

    let queued = board
        .queries
        .today(board.owner_id)
        .await
        .expect("projection should succeed");
    assert!(queued.is_empty());
    let log = board
        .workflow
        .recorder()
        .log_for_task(task.id())
        .await
        .expect("log lookup should succeed");
    assert!(log.is_empty());
}
