//! `PostgreSQL` adapters for board persistence.

mod models;
mod repository;
pub mod schema;

pub use repository::{BoardPgPool, PostgresActivityRepository, PostgresTaskRepository};
