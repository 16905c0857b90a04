//! Task Core Library
//!
//! This crate provides the domain models, error taxonomy, and trait
//! interfaces for the task service. All other crates depend on the types and
//! interfaces defined here.
//!
//! # Architecture
//!
//! - [`models`] - Domain models (Task, NewTask, UpdateTask)
//! - [`error`] - Error types and result handling
//! - [`repository`] - Repository trait for data persistence
//! - [`validation`] - Payload validation
//!
//! # Example
//!
//! ```rust
//! use task_core::{models::NewTask, validation::TaskValidator};
//!
//! let payload = NewTask::new("Write report", Some("draft".to_string()));
//! TaskValidator::validate_new_task(&payload).unwrap();
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TaskError};
pub use models::{NewTask, Task, UpdateTask};
pub use repository::TaskRepository;
pub use validation::{TaskValidator, MIN_NAME_LEN};

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
