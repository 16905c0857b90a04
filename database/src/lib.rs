//! Database crate for the task service
//!
//! Provides the SQLite implementation of the `TaskRepository` trait: a lazy
//! connection pool, an embedded schema migration, and mapping between rows,
//! domain models and domain errors.
//!
//! # Usage
//!
//! ```rust
//! use database::SqliteTaskRepository;
//! use task_core::repository::TaskRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = SqliteTaskRepository::new(":memory:", 1)?;
//!     repo.migrate().await?;
//!     repo.health_check().await?;
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteTaskRepository;

// Re-export commonly used types from task-core for convenience
pub use task_core::{
    error::{Result, TaskError},
    models::{NewTask, Task, UpdateTask},
    repository::TaskRepository,
};
