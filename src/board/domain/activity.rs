//! Append-only activity records attached to tasks.

use super::{ActivityId, ParseActivityKindError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of event captured by an activity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Task was created.
    Created,
    /// Task was flagged for execution today.
    AddedToToday,
    /// Task was removed from the today queue.
    RemovedFromToday,
    /// Work on the task started for the first time.
    Started,
    /// Work on the task resumed after a hold.
    Resumed,
    /// Work on the task was put on hold.
    OnHold,
    /// Task was completed.
    Completed,
    /// Task fields were edited.
    Edited,
    /// Task was deleted.
    ///
    /// Activities are cascade-deleted with their task, so no workflow
    /// operation currently records this kind; it exists for consumers
    /// that mirror the log into an external audit stream.
    Deleted,
}

impl ActivityKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AddedToToday => "added_to_today",
            Self::RemovedFromToday => "removed_from_today",
            Self::Started => "started",
            Self::Resumed => "resumed",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Edited => "edited",
            Self::Deleted => "deleted",
        }
    }

    /// Returns the display label shown in the activity feed.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::AddedToToday => "Added to today's tasks",
            Self::RemovedFromToday => "Removed from today's tasks",
            Self::Started => "Started",
            Self::Resumed => "Resumed",
            Self::OnHold => "Put on hold",
            Self::Completed => "Completed",
            Self::Edited => "Edited",
            Self::Deleted => "Deleted",
        }
    }

    /// Returns whether this kind opens an effort interval.
    #[must_use]
    pub const fn opens_interval(self) -> bool {
        matches!(self, Self::Started | Self::Resumed)
    }

    /// Returns whether this kind closes an effort interval.
    #[must_use]
    pub const fn closes_interval(self) -> bool {
        matches!(self, Self::OnHold | Self::Completed)
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ActivityKind {
    type Error = ParseActivityKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "created" => Ok(Self::Created),
            "added_to_today" => Ok(Self::AddedToToday),
            "removed_from_today" => Ok(Self::RemovedFromToday),
            "started" => Ok(Self::Started),
            "resumed" => Ok(Self::Resumed),
            "on_hold" => Ok(Self::OnHold),
            "completed" => Ok(Self::Completed),
            "edited" => Ok(Self::Edited),
            "deleted" => Ok(Self::Deleted),
            _ => Err(ParseActivityKindError(value.to_owned())),
        }
    }
}

/// Immutable activity record.
///
/// An activity is stamped once at creation and never updated afterwards;
/// the log it forms is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    id: ActivityId,
    task_id: TaskId,
    kind: ActivityKind,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted activity record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedActivityData {
    /// Persisted activity identifier.
    pub id: ActivityId,
    /// Owning task identifier.
    pub task_id: TaskId,
    /// Persisted activity kind.
    pub kind: ActivityKind,
    /// Persisted event timestamp.
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Creates a new activity stamped with the current clock time.
    #[must_use]
    pub fn new(task_id: TaskId, kind: ActivityKind, clock: &impl Clock) -> Self {
        Self {
            id: ActivityId::new(),
            task_id,
            kind,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs an activity from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedActivityData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            kind: data.kind,
            created_at: data.created_at,
        }
    }

    /// Returns the activity identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the owning task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the activity kind.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Returns the event timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
