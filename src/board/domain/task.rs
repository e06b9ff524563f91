//! Task aggregate root and workflow transition guards.

use super::{
    ActivityKind, EffortMinutes, OutputDescription, OwnerId, TaskDescription, TaskId, TaskStatus,
    TaskTitle, WorkflowViolation,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Start and completion timestamps are intentionally not stored here: they
/// are derived from the activity log (see [`super::report`]), which is the
/// single source of truth for when work actually happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: OwnerId,
    title: TaskTitle,
    description: TaskDescription,
    output: OutputDescription,
    status: TaskStatus,
    deadline: DateTime<Utc>,
    estimated_effort: EffortMinutes,
    is_today_task: bool,
    created_at: DateTime<Utc>,
}

/// Validated field values for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Owning user identifier.
    pub owner_id: OwnerId,
    /// Task title.
    pub title: TaskTitle,
    /// Task description.
    pub description: TaskDescription,
    /// Expected deliverable.
    pub output: OutputDescription,
    /// Deadline for the task.
    pub deadline: DateTime<Utc>,
    /// Estimated effort in minutes.
    pub estimated_effort: EffortMinutes,
    /// Whether the task starts out flagged for today.
    pub is_today_task: bool,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub owner_id: OwnerId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted deliverable description.
    pub output: OutputDescription,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted deadline.
    pub deadline: DateTime<Utc>,
    /// Persisted effort estimate.
    pub estimated_effort: EffortMinutes,
    /// Persisted today-queue flag.
    pub is_today_task: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Field changes applied by an edit.
///
/// `None` leaves the corresponding field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement description.
    pub description: Option<TaskDescription>,
    /// Replacement deliverable description.
    pub output: Option<OutputDescription>,
    /// Replacement deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Replacement effort estimate.
    pub estimated_effort: Option<EffortMinutes>,
    /// Replacement today-queue flag.
    pub is_today_task: Option<bool>,
    /// Replacement lifecycle status.
    pub status: Option<TaskStatus>,
}

/// How an edit changed the today-queue flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodayFlagChange {
    /// The flag kept its previous value.
    Unchanged,
    /// The flag flipped from false to true.
    Added,
    /// The flag flipped from true to false.
    Removed,
}

impl Task {
    /// Creates a new not-started task.
    #[must_use]
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            output: data.output,
            status: TaskStatus::NotStarted,
            deadline: data.deadline,
            estimated_effort: data.estimated_effort,
            is_today_task: data.is_today_task,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            output: data.output,
            status: data.status,
            deadline: data.deadline,
            estimated_effort: data.estimated_effort,
            is_today_task: data.is_today_task,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the expected deliverable.
    #[must_use]
    pub const fn output(&self) -> &OutputDescription {
        &self.output
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the effort estimate.
    #[must_use]
    pub const fn estimated_effort(&self) -> EffortMinutes {
        self.estimated_effort
    }

    /// Returns whether the task is flagged for today.
    #[must_use]
    pub const fn is_today_task(&self) -> bool {
        self.is_today_task
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flags the task for execution today.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowViolation::AlreadyFlaggedForToday`] when the flag
    /// is already set, or [`WorkflowViolation::NotPending`] when the task
    /// has already been started.
    pub const fn flag_for_today(&mut self) -> Result<(), WorkflowViolation> {
        if self.is_today_task {
            return Err(WorkflowViolation::AlreadyFlaggedForToday(self.id));
        }
        if !matches!(self.status, TaskStatus::NotStarted) {
            return Err(WorkflowViolation::NotPending {
                task_id: self.id,
                status: self.status,
            });
        }
        self.is_today_task = true;
        Ok(())
    }

    /// Removes the task from the today queue.
    ///
    /// Only the flag itself is guarded; a held task may leave the queue.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowViolation::NotFlaggedForToday`] when the flag is
    /// not set.
    pub const fn unflag_for_today(&mut self) -> Result<(), WorkflowViolation> {
        if !self.is_today_task {
            return Err(WorkflowViolation::NotFlaggedForToday(self.id));
        }
        self.is_today_task = false;
        Ok(())
    }

    /// Moves the task into progress.
    ///
    /// Returns the activity kind describing the transition: `Started` when
    /// the task had not been started before, `Resumed` when it comes out
    /// of a hold. The distinction is taken from the pre-transition status
    /// snapshot, not from the activity log.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowViolation::NotFlaggedForToday`] when the task is
    /// not in the today queue, or [`WorkflowViolation::NotStartable`] when
    /// the status machine forbids the transition.
    pub const fn begin(&mut self) -> Result<ActivityKind, WorkflowViolation> {
        if !self.is_today_task {
            return Err(WorkflowViolation::NotFlaggedForToday(self.id));
        }
        let kind = match self.status {
            TaskStatus::NotStarted => ActivityKind::Started,
            TaskStatus::OnHold => ActivityKind::Resumed,
            TaskStatus::InProgress | TaskStatus::Completed => {
                return Err(WorkflowViolation::NotStartable {
                    task_id: self.id,
                    status: self.status,
                });
            }
        };
        self.status = TaskStatus::InProgress;
        Ok(kind)
    }

    /// Puts the task on hold.
    ///
    /// The today flag survives a hold; that is what makes a later resume
    /// reachable, since [`Self::begin`] requires the flag.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowViolation::NotInProgress`] when the task is not
    /// in progress.
    pub const fn pause(&mut self) -> Result<(), WorkflowViolation> {
        if !matches!(self.status, TaskStatus::InProgress) {
            return Err(WorkflowViolation::NotInProgress {
                task_id: self.id,
                status: self.status,
            });
        }
        self.status = TaskStatus::OnHold;
        Ok(())
    }

    /// Completes the task.
    ///
    /// Completion always clears the today flag, whatever its prior value.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowViolation::NotInProgress`] when the task is not
    /// in progress.
    pub const fn finish(&mut self) -> Result<(), WorkflowViolation> {
        if !matches!(self.status, TaskStatus::InProgress) {
            return Err(WorkflowViolation::NotInProgress {
                task_id: self.id,
                status: self.status,
            });
        }
        self.status = TaskStatus::Completed;
        self.is_today_task = false;
        Ok(())
    }

    /// Applies an edit and reports how the today flag changed.
    ///
    /// Edits bypass the workflow guards: they are the board's direct-edit
    /// path, mirroring a form submission that may touch any field at once.
    /// That includes the today flag, which the workflow path only permits
    /// on not-started or in-progress tasks; an edit can flag a held or
    /// completed task, and the flag stays wherever the edit put it.
    pub fn apply_edit(&mut self, edit: TaskEdit) -> TodayFlagChange {
        let was_today_task = self.is_today_task;

        if let Some(title) = edit.title {
            self.title = title;
        }
        if let Some(description) = edit.description {
            self.description = description;
        }
        if let Some(output) = edit.output {
            self.output = output;
        }
        if let Some(deadline) = edit.deadline {
            self.deadline = deadline;
        }
        if let Some(estimated_effort) = edit.estimated_effort {
            self.estimated_effort = estimated_effort;
        }
        if let Some(is_today_task) = edit.is_today_task {
            self.is_today_task = is_today_task;
        }
        if let Some(status) = edit.status {
            self.status = status;
        }

        match (was_today_task, self.is_today_task) {
            (false, true) => TodayFlagChange::Added,
            (true, false) => TodayFlagChange::Removed,
            _ => TodayFlagChange::Unchanged,
        }
    }
}
