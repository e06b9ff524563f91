//! In-memory repositories for tests and single-process use.

mod activity;
mod task;

pub use activity::InMemoryActivityRepository;
pub use task::InMemoryTaskRepository;
