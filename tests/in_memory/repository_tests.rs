//! In-memory integration tests for the repository contracts.

use chrono::Duration;
use mockable::DefaultClock;
use rstest::rstest;
use wipboard::board::{
    domain::{ActivityKind, OwnerId, TaskId},
    ports::{ActivityRepository, TaskRepository, TaskRepositoryError},
};

use super::helpers::{Board, board, request};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storing_the_same_task_twice_is_rejected(board: Board) {
    let task = board
        .workflow
        .create(request(board.owner_id, "Plan the sprint"))
        .await
        .expect("task creation should succeed");

    let result = board.tasks.store(&task).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_an_unknown_task_reports_not_found(board: Board) {
    let task = board
        .workflow
        .create(request(board.owner_id, "Plan the sprint"))
        .await
        .expect("task creation should succeed");
    board
        .workflow
        .delete(task.id())
        .await
        .expect("delete should succeed");

    let result = board.tasks.update(&task).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removing_an_unknown_task_reports_not_found(board: Board) {
    let missing = TaskId::new();

    let result = board.tasks.remove(missing).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owner_listing_never_leaks_across_owners(board: Board) {
    let mine = board
        .workflow
        .create(request(board.owner_id, "Plan the sprint"))
        .await
        .expect("task creation should succeed");
    let other_owner = OwnerId::new();
    board
        .workflow
        .create(request(other_owner, "Water the plants"))
        .await
        .expect("task creation should succeed");

    let listed = board
        .tasks
        .list_by_owner(board.owner_id)
        .await
        .expect("listing should succeed");

    assert_eq!(listed, vec![mine]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn appending_the_same_activity_twice_is_rejected(board: Board) {
    let task = board
        .workflow
        .create(request(board.owner_id, "Plan the sprint"))
        .await
        .expect("task creation should succeed");
    let log = board
        .workflow
        .recorder()
        .log_for_task(task.id())
        .await
        .expect("log lookup should succeed");
    let created = log.first().expect("creation activity should be recorded");

    let result = board.activities.append(created).await;

    assert!(result.is_err());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn activity_listing_is_ordered_by_creation_time(board: Board) {
    use wipboard::board::domain::{Activity, ActivityId, PersistedActivityData};

    let task_id = TaskId::new();
    let base = mockable::Clock::utc(&DefaultClock);
    for (offset, kind) in [
        (2_i64, ActivityKind::Started),
        (0, ActivityKind::Created),
        (1, ActivityKind::AddedToToday),
    ] {
        board
            .activities
            .append(&Activity::from_persisted(PersistedActivityData {
                id: ActivityId::new(),
                task_id,
                kind,
                created_at: base + Duration::minutes(offset),
            }))
            .await
            .expect("append should succeed");
    }

    let listed = board
        .activities
        .list_for_task(task_id)
        .await
        .expect("listing should succeed");

    let kinds: Vec<ActivityKind> = listed.iter().map(|activity| activity.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ActivityKind::Created,
            ActivityKind::AddedToToday,
            ActivityKind::Started,
        ]
    );
}
