//! Task board workflow for Wipboard.
//!
//! This module implements the board core: creating and editing task records,
//! enforcing validated workflow transitions (today-queue membership, start,
//! hold, complete) with their activity side effects, and deriving the board
//! projections (today's queue, by-status columns, recently completed,
//! upcoming-deadline, overdue). The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
