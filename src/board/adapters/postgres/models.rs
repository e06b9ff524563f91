//! Diesel row models for board persistence.

use super::schema::{activities, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Free-form task description.
    pub description: String,
    /// Expected deliverable.
    pub output: String,
    /// Lifecycle status.
    pub status: String,
    /// Deadline for the task.
    pub deadline: DateTime<Utc>,
    /// Estimated effort in minutes.
    pub estimated_effort: i16,
    /// Whether the task is flagged for today.
    pub is_today_task: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Free-form task description.
    pub description: String,
    /// Expected deliverable.
    pub output: String,
    /// Lifecycle status.
    pub status: String,
    /// Deadline for the task.
    pub deadline: DateTime<Utc>,
    /// Estimated effort in minutes.
    pub estimated_effort: i16,
    /// Whether the task is flagged for today.
    pub is_today_task: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for activity records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ActivityRow {
    /// Activity identifier.
    pub id: uuid::Uuid,
    /// Owning task identifier.
    pub task_id: uuid::Uuid,
    /// Event kind.
    pub kind: String,
    /// Event timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for activity records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activities)]
pub struct NewActivityRow {
    /// Activity identifier.
    pub id: uuid::Uuid,
    /// Owning task identifier.
    pub task_id: uuid::Uuid,
    /// Event kind.
    pub kind: String,
    /// Event timestamp.
    pub created_at: DateTime<Utc>,
}
