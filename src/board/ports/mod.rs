//! Port contracts for the board core.

pub mod repository;

pub use repository::{
    ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult, TaskRepository,
    TaskRepositoryError, TaskRepositoryResult,
};
