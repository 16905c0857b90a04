//! Shared test fixtures for task data.

use chrono::Utc;
use task_core::{NewTask, Task};

/// A valid task with the given id
pub fn sample_task(id: i64) -> Task {
    Task {
        id,
        name: format!("Sample task {id}"),
        description: Some(format!("Description for task {id}")),
        created_at: Utc::now(),
    }
}

/// A valid create payload
pub fn sample_new_task() -> NewTask {
    NewTask::new("Write report", Some("draft".to_string()))
}

/// A create payload whose name is below the minimum length
pub fn short_name_new_task() -> NewTask {
    NewTask::new("abcd", None)
}
