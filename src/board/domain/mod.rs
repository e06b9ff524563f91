//! Domain model for the task board.
//!
//! The board domain models task records, their lifecycle status machine,
//! the append-only activity log, and the pure derivations computed from
//! activity sequences. All infrastructure concerns are kept outside the
//! domain boundary.

mod activity;
mod error;
mod fields;
mod ids;
pub mod report;
mod status;
mod task;

pub use activity::{Activity, ActivityKind, PersistedActivityData};
pub use error::{
    BoardDomainError, ParseActivityKindError, ParseTaskStatusError, WorkflowViolation,
};
pub use fields::{EffortMinutes, OutputDescription, TaskDescription, TaskTitle};
pub use ids::{ActivityId, OwnerId, TaskId};
pub use status::TaskStatus;
pub use task::{NewTaskData, PersistedTaskData, Task, TaskEdit, TodayFlagChange};
