//! Append-only activity capture.

use crate::board::{
    domain::{Activity, ActivityKind, TaskId},
    ports::{ActivityRepository, ActivityRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;

/// Records immutable activity entries stamped from the injected clock.
///
/// Past events are never rewritten; the only destructive operation is the
/// cascade that removes a deleted task's own records.
#[derive(Clone)]
pub struct ActivityRecorder<A, C>
where
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    activities: Arc<A>,
    clock: Arc<C>,
}

impl<A, C> ActivityRecorder<A, C>
where
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new recorder.
    #[must_use]
    pub const fn new(activities: Arc<A>, clock: Arc<C>) -> Self {
        Self { activities, clock }
    }

    /// Appends one activity of the given kind for the task.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the append fails.
    pub async fn record(
        &self,
        task_id: TaskId,
        kind: ActivityKind,
    ) -> ActivityRepositoryResult<Activity> {
        let activity = Activity::new(task_id, kind, &*self.clock);
        self.activities.append(&activity).await?;
        Ok(activity)
    }

    /// Returns the task's log ordered by creation time ascending.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the lookup fails.
    pub async fn log_for_task(&self, task_id: TaskId) -> ActivityRepositoryResult<Vec<Activity>> {
        self.activities.list_for_task(task_id).await
    }

    /// Removes the log of a deleted task.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the removal fails.
    pub async fn erase_for_task(&self, task_id: TaskId) -> ActivityRepositoryResult<()> {
        self.activities.remove_for_task(task_id).await
    }
}
