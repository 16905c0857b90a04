//! HTTP route layer for the task service
//!
//! Bridges HTTP clients and the `TaskRepository` trait: five JSON routes,
//! payload validation with first-error short-circuit, and uniform error
//! bodies. See [`server::ApiServer`] for construction and serving.
//!
//! # Usage
//!
//! ```no_run
//! use rest_api::ApiServer;
//! use std::sync::Arc;
//!
//! async fn start() -> Result<(), Box<dyn std::error::Error>> {
//!     let repository = Arc::new(mocks::MockTaskRepository::new());
//!     ApiServer::new(repository).serve("127.0.0.1:3000").await
//! }
//! ```

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use handlers::GREETING;
pub use server::ApiServer;

// Re-export core types for external consumers
pub use task_core::{NewTask, Task, TaskRepository, UpdateTask};
