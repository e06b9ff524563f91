//! Wipboard: personal task-tracking core.
//!
//! This crate provides the workflow engine behind a single-user WIP board:
//! tasks with deadlines and effort estimates move through a small lifecycle
//! (not started, in progress, on hold, completed), may be flagged for
//! execution today, and every transition appends a timestamped activity
//! record used to derive actual effort and hold counts.
//!
//! # Architecture
//!
//! Wipboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Task workflow engine, board queries, and activity recording

pub mod board;
