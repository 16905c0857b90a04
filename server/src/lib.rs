//! Task API server library
//!
//! Configuration management, database setup and server initialization for
//! the task management HTTP service.

pub mod config;
pub mod setup;
pub mod telemetry;

pub use config::Config;
pub use setup::{create_repository, ensure_database_directory, initialize_app};
pub use telemetry::init_telemetry;
