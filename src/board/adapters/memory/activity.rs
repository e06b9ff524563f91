//! In-memory activity repository.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Activity, ActivityId, TaskId},
    ports::{ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult},
};

/// Thread-safe in-memory activity repository.
///
/// Records are held in append order per task; `list_for_task` still sorts
/// by timestamp so reconstructed logs match the port contract.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    state: Arc<RwLock<InMemoryActivityState>>,
}

#[derive(Debug, Default)]
struct InMemoryActivityState {
    by_task: HashMap<TaskId, Vec<Activity>>,
    ids: HashSet<ActivityId>,
}

impl InMemoryActivityRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> ActivityRepositoryError {
    ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn append(&self, activity: &Activity) -> ActivityRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.ids.insert(activity.id()) {
            return Err(ActivityRepositoryError::DuplicateActivity(activity.id()));
        }
        state
            .by_task
            .entry(activity.task_id())
            .or_default()
            .push(activity.clone());
        Ok(())
    }

    async fn list_for_task(&self, task_id: TaskId) -> ActivityRepositoryResult<Vec<Activity>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut activities = state.by_task.get(&task_id).cloned().unwrap_or_default();
        activities.sort_by_key(Activity::created_at);
        Ok(activities)
    }

    async fn remove_for_task(&self, task_id: TaskId) -> ActivityRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(removed) = state.by_task.remove(&task_id) {
            for activity in &removed {
                state.ids.remove(&activity.id());
            }
        }
        Ok(())
    }
}
