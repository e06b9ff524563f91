//! Orchestration services for the board core.

mod queries;
mod recorder;
mod workflow;

pub use queries::{
    BoardEntry, BoardQueryError, BoardQueryResult, BoardQueryService, DEFAULT_WINDOW_DAYS,
    SortDirection,
};
pub use recorder::ActivityRecorder;
pub use workflow::{
    BoardWorkflowError, BoardWorkflowResult, BoardWorkflowService, CreateTaskRequest,
    EditTaskRequest,
};
