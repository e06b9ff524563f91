//! Shared test helpers for in-memory repository integration tests.

use chrono::{DateTime, Duration, Utc};
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use std::sync::Arc;
use wipboard::board::{
    adapters::memory::{InMemoryActivityRepository, InMemoryTaskRepository},
    domain::OwnerId,
    services::{BoardQueryService, BoardWorkflowService, CreateTaskRequest},
};

/// Workflow service type used by the integration tests.
pub type TestWorkflow =
    BoardWorkflowService<InMemoryTaskRepository, InMemoryActivityRepository, DefaultClock>;

/// Query service type used by the integration tests.
pub type TestQueries =
    BoardQueryService<InMemoryTaskRepository, InMemoryActivityRepository, DefaultClock>;

/// One board wired over shared in-memory repositories.
pub struct Board {
    pub workflow: TestWorkflow,
    pub queries: TestQueries,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub activities: Arc<InMemoryActivityRepository>,
    pub owner_id: OwnerId,
}

/// Provides a fresh board for each test.
#[fixture]
pub fn board() -> Board {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let activities = Arc::new(InMemoryActivityRepository::new());
    let clock = Arc::new(DefaultClock);
    Board {
        workflow: BoardWorkflowService::new(
            Arc::clone(&tasks),
            Arc::clone(&activities),
            Arc::clone(&clock),
        ),
        queries: BoardQueryService::new(Arc::clone(&tasks), Arc::clone(&activities), clock),
        tasks,
        activities,
        owner_id: OwnerId::new(),
    }
}

/// A deadline comfortably in the future relative to the wall clock.
pub fn tomorrow() -> DateTime<Utc> {
    DefaultClock.utc() + Duration::days(1)
}

/// Builds a creation request with sensible defaults for the given owner.
pub fn request(owner_id: OwnerId, title: &str) -> CreateTaskRequest {
    CreateTaskRequest::new(owner_id, title, "Finished document", tomorrow(), 45)
}
