use crate::{
    error::Result,
    models::{NewTask, Task, UpdateTask},
};
use async_trait::async_trait;

/// Repository trait for task persistence and retrieval operations
///
/// This trait defines the interface for all task data operations.
/// Implementations must be thread-safe and support concurrent access; the
/// service layer does no locking of its own on top of them.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task
    ///
    /// The payload is expected to have passed shape validation already.
    ///
    /// # Returns
    /// * `Ok(Task)` - The persisted task with its assigned id and timestamp
    /// * `Err(TaskError::Database)` - If the store operation fails
    async fn create(&self, task: NewTask) -> Result<Task>;

    /// List all tasks currently stored, ordered by id
    ///
    /// No pagination and no filtering; the full collection is returned.
    ///
    /// # Returns
    /// * `Ok(Vec<Task>)` - All tasks (may be empty)
    /// * `Err(TaskError::Database)` - If the store operation fails
    async fn list(&self) -> Result<Vec<Task>>;

    /// Get a task by its numeric id
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The task if found
    /// * `Ok(None)` - If no task exists with that id (absence, not an error)
    /// * `Err(TaskError::Database)` - If the store operation fails
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>>;

    /// Apply a partial update to the task matching `id`
    ///
    /// Only fields present in `updates` are written; an empty payload leaves
    /// the task unchanged and returns it as-is.
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The post-update task
    /// * `Ok(None)` - If no task exists with that id (absence, not an error)
    /// * `Err(TaskError::Database)` - If the store operation fails
    async fn update_by_id(&self, id: i64, updates: UpdateTask) -> Result<Option<Task>>;

    /// Remove the task matching `id` and return it
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The deleted task
    /// * `Ok(None)` - If no task exists with that id (absence, not an error)
    /// * `Err(TaskError::Database)` - If the store operation fails
    async fn delete_by_id(&self, id: i64) -> Result<Option<Task>>;

    /// Probe store connectivity
    ///
    /// # Returns
    /// * `Ok(())` - Store is reachable
    /// * `Err(TaskError::Database)` - Store is unavailable
    async fn health_check(&self) -> Result<()>;
}
