//! Shared world state for board workflow BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use wipboard::board::{
    adapters::memory::{InMemoryActivityRepository, InMemoryTaskRepository},
    domain::{OwnerId, Task, TaskId},
    services::{BoardWorkflowError, BoardWorkflowService, CreateTaskRequest},
};

/// Service type used by the BDD world.
pub type TestBoardService =
    BoardWorkflowService<InMemoryTaskRepository, InMemoryActivityRepository, DefaultClock>;

/// Scenario world for board workflow behaviour tests.
pub struct BoardWorld {
    pub workflow: TestBoardService,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub owner_id: OwnerId,
    pub task_ids_by_title: HashMap<String, TaskId>,
    pub current_task_id: Option<TaskId>,
    pub last_result: Option<Result<Task, BoardWorkflowError>>,
}

impl BoardWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let workflow = BoardWorkflowService::new(
            Arc::clone(&tasks),
            Arc::new(InMemoryActivityRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            workflow,
            tasks,
            owner_id: OwnerId::new(),
            task_ids_by_title: HashMap::new(),
            current_task_id: None,
            last_result: None,
        }
    }

    /// Builds a creation request for a scenario task.
    #[must_use]
    pub fn request(&self, title: &str) -> CreateTaskRequest {
        let deadline = DefaultClock.utc() + Duration::days(1);
        CreateTaskRequest::new(self.owner_id, title, "Finished document", deadline, 45)
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
