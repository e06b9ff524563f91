//! `PostgreSQL` repository implementations for board persistence.

use super::{
    models::{ActivityRow, NewActivityRow, NewTaskRow, TaskRow},
    schema::{activities, tasks},
};
use crate::board::{
    domain::{
        Activity, ActivityId, ActivityKind, EffortMinutes, OutputDescription, OwnerId,
        PersistedActivityData, PersistedTaskData, Task, TaskDescription, TaskId, TaskStatus,
        TaskTitle,
    },
    ports::{
        ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult, TaskRepository,
        TaskRepositoryError, TaskRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: BoardPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = task_to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = task_to_new_row(task);

        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if removed == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_owner(&self, owner_id: OwnerId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner_id.into_inner()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn task_to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner_id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        output: task.output().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        deadline: task.deadline(),
        estimated_effort: i16::from(task.estimated_effort().minutes()),
        is_today_task: task.is_today_task(),
        created_at: task.created_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let effort_minutes =
        u8::try_from(row.estimated_effort).map_err(TaskRepositoryError::persistence)?;
    let title = TaskTitle::new(row.title).map_err(TaskRepositoryError::persistence)?;
    let description =
        TaskDescription::new(row.description).map_err(TaskRepositoryError::persistence)?;
    let output = OutputDescription::new(row.output).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        owner_id: OwnerId::from_uuid(row.owner_id),
        title,
        description,
        output,
        status,
        deadline: row.deadline,
        estimated_effort: EffortMinutes::new(effort_minutes),
        is_today_task: row.is_today_task,
        created_at: row.created_at,
    }))
}

/// `PostgreSQL`-backed activity repository.
#[derive(Debug, Clone)]
pub struct PostgresActivityRepository {
    pool: BoardPgPool,
}

impl PostgresActivityRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ActivityRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ActivityRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ActivityRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ActivityRepositoryError::persistence)?
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn append(&self, activity: &Activity) -> ActivityRepositoryResult<()> {
        let activity_id = activity.id();
        let new_row = NewActivityRow {
            id: activity.id().into_inner(),
            task_id: activity.task_id().into_inner(),
            kind: activity.kind().as_str().to_owned(),
            created_at: activity.created_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(activities::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ActivityRepositoryError::DuplicateActivity(activity_id)
                    }
                    _ => ActivityRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_for_task(&self, task_id: TaskId) -> ActivityRepositoryResult<Vec<Activity>> {
        self.run_blocking(move |connection| {
            let rows = activities::table
                .filter(activities::task_id.eq(task_id.into_inner()))
                .order(activities::created_at.asc())
                .select(ActivityRow::as_select())
                .load::<ActivityRow>(connection)
                .map_err(ActivityRepositoryError::persistence)?;
            rows.into_iter().map(row_to_activity).collect()
        })
        .await
    }

    async fn remove_for_task(&self, task_id: TaskId) -> ActivityRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(activities::table.filter(activities::task_id.eq(task_id.into_inner())))
                .execute(connection)
                .map_err(ActivityRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn row_to_activity(row: ActivityRow) -> ActivityRepositoryResult<Activity> {
    let kind =
        ActivityKind::try_from(row.kind.as_str()).map_err(ActivityRepositoryError::persistence)?;
    Ok(Activity::from_persisted(PersistedActivityData {
        id: ActivityId::from_uuid(row.id),
        task_id: TaskId::from_uuid(row.task_id),
        kind,
        created_at: row.created_at,
    }))
}
