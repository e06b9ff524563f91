//! Unit test suites for the board module.
//!
//! - `status_tests`: status machine transition grid and parsing
//! - `domain_tests`: validated fields and task workflow guards
//! - `report_tests`: effort, hold-count, and period derivations
//! - `workflow_tests`: service orchestration over in-memory repositories
//! - `query_tests`: board projections against a fixed clock

pub mod support;
