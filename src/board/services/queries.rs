//! Board projections: read-only task views derived from state and time.

use crate::board::{
    domain::{Activity, ActivityKind, OwnerId, Task, TaskStatus},
    ports::{ActivityRepository, ActivityRepositoryError, TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Default day window for the recently-completed and upcoming-deadline
/// projections.
pub const DEFAULT_WINDOW_DAYS: u32 = 5;

/// Deadline sort order for by-status projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Earliest deadline first.
    Ascending,
    /// Latest deadline first.
    Descending,
}

/// One task with its attached activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    /// The task record.
    pub task: Task,
    /// Activities ordered by creation time ascending, except in the
    /// recently-completed projection where only `Completed` entries are
    /// attached.
    pub activities: Vec<Activity>,
}

/// Errors returned by board projections.
#[derive(Debug, Error)]
pub enum BoardQueryError {
    /// Task persistence failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Activity persistence failed.
    #[error(transparent)]
    Activities(#[from] ActivityRepositoryError),
}

/// Result type for board projections.
pub type BoardQueryResult<T> = Result<T, BoardQueryError>;

/// Read-side service producing the board's task projections.
///
/// All projections are scoped to one owner, deterministic for a fixed
/// clock, and free of side effects.
#[derive(Clone)]
pub struct BoardQueryService<T, A, C>
where
    T: TaskRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    activities: Arc<A>,
    clock: Arc<C>,
}

impl<T, A, C> BoardQueryService<T, A, C>
where
    T: TaskRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new query service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, activities: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            activities,
            clock,
        }
    }

    /// Today's queue: not-started tasks flagged for today, earliest
    /// deadline first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardQueryError`] when persistence lookups fail.
    pub async fn today(&self, owner_id: OwnerId) -> BoardQueryResult<Vec<BoardEntry>> {
        let mut tasks: Vec<Task> = self
            .tasks
            .list_by_owner(owner_id)
            .await?
            .into_iter()
            .filter(|task| task.status() == TaskStatus::NotStarted && task.is_today_task())
            .collect();
        tasks.sort_by_key(Task::deadline);
        self.attach_all(tasks).await
    }

    /// Tasks in any of the given statuses, sorted by deadline.
    ///
    /// # Errors
    ///
    /// Returns [`BoardQueryError`] when persistence lookups fail.
    pub async fn by_status(
        &self,
        owner_id: OwnerId,
        statuses: &[TaskStatus],
        direction: SortDirection,
    ) -> BoardQueryResult<Vec<BoardEntry>> {
        let mut tasks: Vec<Task> = self
            .tasks
            .list_by_owner(owner_id)
            .await?
            .into_iter()
            .filter(|task| statuses.contains(&task.status()))
            .collect();
        tasks.sort_by_key(Task::deadline);
        if direction == SortDirection::Descending {
            tasks.reverse();
        }
        self.attach_all(tasks).await
    }

    /// Tasks completed within the last `days` days, most recent first.
    ///
    /// The window starts at midnight `days` days before the clock's
    /// current day, inclusive: a task completed exactly `days` days ago is
    /// still listed. A task may carry several `Completed` activities after
    /// status edits; the latest one decides window membership and
    /// ordering. Entries carry only their `Completed` activities.
    ///
    /// # Errors
    ///
    /// Returns [`BoardQueryError`] when persistence lookups fail.
    pub async fn recently_completed(
        &self,
        owner_id: OwnerId,
        days: u32,
    ) -> BoardQueryResult<Vec<BoardEntry>> {
        let cutoff = start_of_day(self.clock.utc()) - Duration::days(i64::from(days));

        let mut dated: Vec<(DateTime<Utc>, BoardEntry)> = Vec::new();
        for task in self.tasks.list_by_owner(owner_id).await? {
            let completions: Vec<Activity> = self
                .activities
                .list_for_task(task.id())
                .await?
                .into_iter()
                .filter(|activity| activity.kind() == ActivityKind::Completed)
                .collect();
            // Activities arrive ascending, so the last completion is the
            // latest one.
            let Some(completed_at) = completions.last().map(Activity::created_at) else {
                continue;
            };
            if completed_at >= cutoff {
                dated.push((
                    completed_at,
                    BoardEntry {
                        task,
                        activities: completions,
                    },
                ));
            }
        }

        dated.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(dated.into_iter().map(|(_, entry)| entry).collect())
    }

    /// Unflagged, not-started tasks whose deadline falls within the next
    /// `days` days (measured to the end of the last day), earliest first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardQueryError`] when persistence lookups fail.
    pub async fn upcoming_deadline(
        &self,
        owner_id: OwnerId,
        days: u32,
    ) -> BoardQueryResult<Vec<BoardEntry>> {
        let now = self.clock.utc();
        // End of today plus `days`, expressed as an exclusive midnight
        // bound.
        let window_end = start_of_day(now) + Duration::days(i64::from(days) + 1);

        let mut tasks: Vec<Task> = self
            .tasks
            .list_by_owner(owner_id)
            .await?
            .into_iter()
            .filter(|task| {
                task.status() == TaskStatus::NotStarted
                    && !task.is_today_task()
                    && now < task.deadline()
                    && task.deadline() < window_end
            })
            .collect();
        tasks.sort_by_key(Task::deadline);
        self.attach_all(tasks).await
    }

    /// Unflagged, not-started tasks whose deadline has passed, earliest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardQueryError`] when persistence lookups fail.
    pub async fn overdue(&self, owner_id: OwnerId) -> BoardQueryResult<Vec<BoardEntry>> {
        let now = self.clock.utc();
        let mut tasks: Vec<Task> = self
            .tasks
            .list_by_owner(owner_id)
            .await?
            .into_iter()
            .filter(|task| {
                task.status() == TaskStatus::NotStarted
                    && !task.is_today_task()
                    && task.deadline() < now
            })
            .collect();
        tasks.sort_by_key(Task::deadline);
        self.attach_all(tasks).await
    }

    async fn attach_all(&self, tasks: Vec<Task>) -> BoardQueryResult<Vec<BoardEntry>> {
        let mut entries = Vec::with_capacity(tasks.len());
        for task in tasks {
            let activities = self.activities.list_for_task(task.id()).await?;
            entries.push(BoardEntry { task, activities });
        }
        Ok(entries)
    }
}

/// Midnight at the start of the timestamp's UTC day.
fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}
