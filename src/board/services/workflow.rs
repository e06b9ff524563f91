//! Workflow engine: validated task transitions and their side effects.

use super::ActivityRecorder;
use crate::board::{
    domain::{
        ActivityKind, BoardDomainError, EffortMinutes, NewTaskData, OutputDescription, OwnerId,
        ParseTaskStatusError, Task, TaskDescription, TaskEdit, TaskId, TaskStatus, TaskTitle,
        TodayFlagChange, WorkflowViolation,
    },
    ports::{ActivityRepository, ActivityRepositoryError, TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    owner_id: OwnerId,
    title: String,
    description: String,
    output: String,
    deadline: DateTime<Utc>,
    estimated_effort: u8,
    is_today_task: bool,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        owner_id: OwnerId,
        title: impl Into<String>,
        output: impl Into<String>,
        deadline: DateTime<Utc>,
        estimated_effort: u8,
    ) -> Self {
        Self {
            owner_id,
            title: title.into(),
            description: String::new(),
            output: output.into(),
            deadline,
            estimated_effort,
            is_today_task: false,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Flags the task for today at creation time.
    #[must_use]
    pub const fn flagged_for_today(mut self) -> Self {
        self.is_today_task = true;
        self
    }
}

/// Request payload for a direct task edit.
///
/// Unset fields keep their current value. The status travels as its
/// canonical string because the form layer submits labels, not enum
/// values; it is parsed before anything mutates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskRequest {
    title: Option<String>,
    description: Option<String>,
    output: Option<String>,
    deadline: Option<DateTime<Utc>>,
    estimated_effort: Option<u8>,
    is_today_task: Option<bool>,
    status: Option<String>,
}

impl EditTaskRequest {
    /// Creates an empty edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement deliverable description.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Sets a replacement deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets a replacement effort estimate.
    #[must_use]
    pub const fn with_estimated_effort(mut self, minutes: u8) -> Self {
        self.estimated_effort = Some(minutes);
        self
    }

    /// Sets a replacement today-queue flag.
    #[must_use]
    pub const fn with_today_flag(mut self, is_today_task: bool) -> Self {
        self.is_today_task = Some(is_today_task);
        self
    }

    /// Sets a replacement status by its canonical string.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Service-level errors for workflow operations.
#[derive(Debug, Error)]
pub enum BoardWorkflowError {
    /// The target task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A workflow precondition was violated; nothing was mutated.
    #[error(transparent)]
    Violation(#[from] WorkflowViolation),

    /// Domain validation failed on an input field.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// An edit carried an unknown status string.
    #[error(transparent)]
    Status(#[from] ParseTaskStatusError),

    /// Task persistence failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Activity persistence failed.
    #[error(transparent)]
    Activities(#[from] ActivityRepositoryError),
}

/// Result type for workflow operations.
pub type BoardWorkflowResult<T> = Result<T, BoardWorkflowError>;

/// Task workflow orchestration service.
///
/// Every operation loads current state, validates, mutates, persists, and
/// records activities, in that order; validation failures leave no trace.
/// The in-progress exclusivity scan in [`Self::start`] is read-then-write
/// and not atomic against a concurrent start from a second session; this
/// single-user tool accepts last-writer-wins there.
#[derive(Clone)]
pub struct BoardWorkflowService<T, A, C>
where
    T: TaskRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    recorder: ActivityRecorder<A, C>,
    clock: Arc<C>,
}

impl<T, A, C> BoardWorkflowService<T, A, C>
where
    T: TaskRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new workflow service.
    #[must_use]
    pub fn new(tasks: Arc<T>, activities: Arc<A>, clock: Arc<C>) -> Self {
        let recorder = ActivityRecorder::new(activities, Arc::clone(&clock));
        Self {
            tasks,
            recorder,
            clock,
        }
    }

    /// Returns the recorder used by this service.
    #[must_use]
    pub const fn recorder(&self) -> &ActivityRecorder<A, C> {
        &self.recorder
    }

    /// Creates a new not-started task.
    ///
    /// Records a `Created` activity, plus `AddedToToday` when the task is
    /// born flagged (the enqueue side effect without its precondition,
    /// which a brand-new task satisfies trivially).
    ///
    /// # Errors
    ///
    /// Returns [`BoardWorkflowError`] when field validation fails or
    /// persistence rejects the task.
    pub async fn create(&self, request: CreateTaskRequest) -> BoardWorkflowResult<Task> {
        let data = NewTaskData {
            owner_id: request.owner_id,
            title: TaskTitle::new(request.title)?,
            description: TaskDescription::new(request.description)?,
            output: OutputDescription::new(request.output)?,
            deadline: request.deadline,
            estimated_effort: EffortMinutes::new(request.estimated_effort),
            is_today_task: request.is_today_task,
        };
        let task = Task::new(data, &*self.clock);
        self.tasks.store(&task).await?;

        self.recorder.record(task.id(), ActivityKind::Created).await?;
        if task.is_today_task() {
            self.recorder
                .record(task.id(), ActivityKind::AddedToToday)
                .await?;
        }
        Ok(task)
    }

    /// Applies a direct edit to a task.
    ///
    /// Records an `Edited` activity, plus `AddedToToday` or
    /// `RemovedFromToday` when the edit flipped the today flag.
    ///
    /// # Errors
    ///
    /// Returns [`BoardWorkflowError::TaskNotFound`] for an unknown task,
    /// or validation/persistence errors.
    pub async fn edit(&self, task_id: TaskId, request: EditTaskRequest) -> BoardWorkflowResult<Task> {
        let edit = TaskEdit {
            title: request.title.map(TaskTitle::new).transpose()?,
            description: request.description.map(TaskDescription::new).transpose()?,
            output: request.output.map(OutputDescription::new).transpose()?,
            deadline: request.deadline,
            estimated_effort: request.estimated_effort.map(EffortMinutes::new),
            is_today_task: request.is_today_task,
            status: request
                .status
                .as_deref()
                .map(TaskStatus::try_from)
                .transpose()?,
        };

        let mut task = self.load(task_id).await?;
        let flag_change = task.apply_edit(edit);
        self.tasks.update(&task).await?;

        self.recorder.record(task_id, ActivityKind::Edited).await?;
        match flag_change {
            TodayFlagChange::Added => {
                self.recorder
                    .record(task_id, ActivityKind::AddedToToday)
                    .await?;
            }
            TodayFlagChange::Removed => {
                self.recorder
                    .record(task_id, ActivityKind::RemovedFromToday)
                    .await?;
            }
            TodayFlagChange::Unchanged => {}
        }
        Ok(task)
    }

    /// Deletes a task and exactly its own activity records.
    ///
    /// # Errors
    ///
    /// Returns [`BoardWorkflowError::TaskNotFound`] for an unknown task,
    /// or persistence errors.
    pub async fn delete(&self, task_id: TaskId) -> BoardWorkflowResult<()> {
        // Resolve first so a stale id fails before the cascade touches
        // anything.
        let task = self.load(task_id).await?;
        self.tasks.remove(task.id()).await?;
        self.recorder.erase_for_task(task.id()).await?;
        Ok(())
    }

    /// Adds a task to the today queue.
    ///
    /// # Errors
    ///
    /// Returns a [`WorkflowViolation`] when the task is already flagged or
    /// has been started; the task is unchanged in that case.
    pub async fn enqueue_today(&self, task_id: TaskId) -> BoardWorkflowResult<Task> {
        let mut task = self.load(task_id).await?;
        task.flag_for_today()?;
        self.tasks.update(&task).await?;
        self.recorder
            .record(task_id, ActivityKind::AddedToToday)
            .await?;
        Ok(task)
    }

    /// Removes a task from the today queue.
    ///
    /// # Errors
    ///
    /// Returns a [`WorkflowViolation`] when the task is not flagged; the
    /// task is unchanged in that case.
    pub async fn dequeue_today(&self, task_id: TaskId) -> BoardWorkflowResult<Task> {
        let mut task = self.load(task_id).await?;
        task.unflag_for_today()?;
        self.tasks.update(&task).await?;
        self.recorder
            .record(task_id, ActivityKind::RemovedFromToday)
            .await?;
        Ok(task)
    }

    /// Moves a today-queue task into progress.
    ///
    /// Any task of the owner currently in progress (expected zero or one)
    /// is put on hold first, with its own `OnHold` activity, so the owner
    /// never holds two in-progress tasks. A `Started` or `Resumed`
    /// activity is then recorded for the target, chosen from its
    /// pre-transition status.
    ///
    /// # Errors
    ///
    /// Returns a [`WorkflowViolation`] when the target is ineligible; no
    /// other task is held in that case.
    pub async fn start(&self, owner_id: OwnerId, task_id: TaskId) -> BoardWorkflowResult<Task> {
        let mut task = self.load(task_id).await?;
        // Validate the target before displacing anything; a failure here
        // must leave the board untouched.
        let transition_kind = task.begin()?;

        let owned = self.tasks.list_by_owner(owner_id).await?;
        for other in owned {
            if other.id() == task.id() || other.status() != TaskStatus::InProgress {
                continue;
            }
            let mut displaced = other;
            displaced.pause()?;
            self.tasks.update(&displaced).await?;
            self.recorder
                .record(displaced.id(), ActivityKind::OnHold)
                .await?;
        }

        self.tasks.update(&task).await?;
        self.recorder.record(task_id, transition_kind).await?;
        Ok(task)
    }

    /// Puts an in-progress task on hold.
    ///
    /// # Errors
    ///
    /// Returns a [`WorkflowViolation`] when the task is not in progress;
    /// the task is unchanged in that case.
    pub async fn hold(&self, task_id: TaskId) -> BoardWorkflowResult<Task> {
        let mut task = self.load(task_id).await?;
        task.pause()?;
        self.tasks.update(&task).await?;
        self.recorder.record(task_id, ActivityKind::OnHold).await?;
        Ok(task)
    }

    /// Completes an in-progress task, clearing its today flag.
    ///
    /// # Errors
    ///
    /// Returns a [`WorkflowViolation`] when the task is not in progress;
    /// the task is unchanged in that case.
    pub async fn complete(&self, task_id: TaskId) -> BoardWorkflowResult<Task> {
        let mut task = self.load(task_id).await?;
        task.finish()?;
        self.tasks.update(&task).await?;
        self.recorder
            .record(task_id, ActivityKind::Completed)
            .await?;
        Ok(task)
    }

    async fn load(&self, task_id: TaskId) -> BoardWorkflowResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(BoardWorkflowError::TaskNotFound(task_id))
    }
}
