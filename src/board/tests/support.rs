//! Shared fixtures for board unit tests.

use crate::board::domain::{
    Activity, ActivityId, ActivityKind, EffortMinutes, NewTaskData, OutputDescription, OwnerId,
    PersistedActivityData, Task, TaskDescription, TaskId, TaskTitle,
};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant for deterministic time-window tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a UTC timestamp or panics on an impossible date.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid test timestamp")
}

/// Builds a task with sensible defaults for the given owner and deadline.
pub fn sample_task(owner_id: OwnerId, deadline: DateTime<Utc>, clock: &impl Clock) -> Task {
    Task::new(
        NewTaskData {
            owner_id,
            title: TaskTitle::new("Write the weekly report").expect("valid title"),
            description: TaskDescription::new("Summarize progress").expect("valid description"),
            output: OutputDescription::new("Report document").expect("valid output"),
            deadline,
            estimated_effort: EffortMinutes::new(60),
            is_today_task: false,
        },
        clock,
    )
}

/// Builds an activity record with an explicit timestamp.
pub fn activity_at(task_id: TaskId, kind: ActivityKind, created_at: DateTime<Utc>) -> Activity {
    Activity::from_persisted(PersistedActivityData {
        id: ActivityId::new(),
        task_id,
        kind,
        created_at,
    })
}
