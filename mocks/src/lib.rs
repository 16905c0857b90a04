//! Test doubles for the task service
//!
//! Provides an in-memory `MockTaskRepository` with error injection and call
//! tracking, plus small data fixtures. Used by the rest-api tests to exercise
//! the route layer without a real store.

pub mod fixtures;
pub mod repository;

pub use fixtures::{sample_new_task, sample_task, short_name_new_task};
pub use repository::MockTaskRepository;
