//! Error types for board domain validation, workflow guards, and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title is {0} characters long, maximum is 255")]
    TitleTooLong(usize),

    /// The task description exceeds the accepted length.
    #[error("task description is {0} characters long, maximum is 1000")]
    DescriptionTooLong(usize),

    /// The expected-output description is empty after trimming.
    #[error("task output must not be empty")]
    EmptyOutput,

    /// The expected-output description exceeds the persisted column width.
    #[error("task output is {0} characters long, maximum is 255")]
    OutputTooLong(usize),
}

/// Workflow precondition violations.
///
/// These represent expected user-driven races (a double-click on a board
/// button, two stale browser tabs) rather than programming errors. The
/// workflow service surfaces them as values; no state is mutated when one
/// is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowViolation {
    /// The task is already flagged for today.
    #[error("task {0} is already flagged for today")]
    AlreadyFlaggedForToday(TaskId),

    /// The task is not flagged for today.
    #[error("task {0} is not flagged for today")]
    NotFlaggedForToday(TaskId),

    /// Only not-started tasks may join the today queue.
    #[error("task {task_id} must be not started to join the today queue, found {status}")]
    NotPending {
        /// Target task identifier.
        task_id: TaskId,
        /// Status found on the task.
        status: TaskStatus,
    },

    /// The task cannot be started from its current status.
    #[error("task {task_id} cannot be started from status {status}")]
    NotStartable {
        /// Target task identifier.
        task_id: TaskId,
        /// Status found on the task.
        status: TaskStatus,
    },

    /// The operation requires an in-progress task.
    #[error("task {task_id} is not in progress, found {status}")]
    NotInProgress {
        /// Target task identifier.
        task_id: TaskId,
        /// Status found on the task.
        status: TaskStatus,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing activity kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown activity kind: {0}")]
pub struct ParseActivityKindError(pub String);
