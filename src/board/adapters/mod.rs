//! Adapter implementations of the board's port contracts.

pub mod memory;
pub mod postgres;
