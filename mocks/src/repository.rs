//! Mock implementation of the TaskRepository trait
//!
//! Provides a thread-safe in-memory repository with:
//! - Error injection capabilities
//! - Call tracking for verification

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};
use task_core::{NewTask, Result, Task, TaskError, TaskRepository, UpdateTask};

/// In-memory TaskRepository for testing
///
/// Ids are assigned sequentially starting at 1, mirroring the store's
/// autoincrement behavior. An injected error is returned by the next
/// operation and then cleared.
pub struct MockTaskRepository {
    tasks: Arc<Mutex<BTreeMap<i64, Task>>>,
    next_id: Arc<AtomicI64>,
    error_injection: Arc<Mutex<Option<TaskError>>>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTaskRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock repository with pre-populated tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut map = BTreeMap::new();
        let mut max_id = 0;
        for task in tasks {
            max_id = max_id.max(task.id);
            map.insert(task.id, task);
        }
        Self {
            tasks: Arc::new(Mutex::new(map)),
            next_id: Arc::new(AtomicI64::new(max_id + 1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Inject an error to be returned by the next operation
    pub fn inject_error(&self, error: TaskError) {
        *self.error_injection.lock() = Some(error);
    }

    /// Number of tasks currently held
    pub fn task_count(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Names of the operations invoked so far, in order
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    fn record_call(&self, operation: &str) {
        self.call_history.lock().push(operation.to_string());
    }

    fn take_injected_error(&self) -> Option<TaskError> {
        self.error_injection.lock().take()
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn create(&self, task: NewTask) -> Result<Task> {
        self.record_call("create");
        if let Some(err) = self.take_injected_error() {
            return Err(err);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let task = Task {
            id,
            name: task.name,
            description: task.description,
            created_at: Utc::now(),
        };
        self.tasks.lock().insert(id, task.clone());
        Ok(task)
    }

    async fn list(&self) -> Result<Vec<Task>> {
        self.record_call("list");
        if let Some(err) = self.take_injected_error() {
            return Err(err);
        }

        Ok(self.tasks.lock().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.record_call("find_by_id");
        if let Some(err) = self.take_injected_error() {
            return Err(err);
        }

        Ok(self.tasks.lock().get(&id).cloned())
    }

    async fn update_by_id(&self, id: i64, updates: UpdateTask) -> Result<Option<Task>> {
        self.record_call("update_by_id");
        if let Some(err) = self.take_injected_error() {
            return Err(err);
        }

        let mut tasks = self.tasks.lock();
        let Some(task) = tasks.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = updates.name {
            task.name = name;
        }
        if let Some(description) = updates.description {
            task.description = Some(description);
        }
        Ok(Some(task.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.record_call("delete_by_id");
        if let Some(err) = self.take_injected_error() {
            return Err(err);
        }

        Ok(self.tasks.lock().remove(&id))
    }

    async fn health_check(&self) -> Result<()> {
        self.record_call("health_check");
        if let Some(err) = self.take_injected_error() {
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn crud_round_trip() {
        let repo = MockTaskRepository::new();

        let created = repo
            .create(NewTask::new("Write report", Some("draft".to_string())))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(repo.task_count(), 1);

        let fetched = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        let updated = repo
            .update_by_id(
                1,
                UpdateTask {
                    name: None,
                    description: Some("final".to_string()),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Write report");
        assert_eq!(updated.description.as_deref(), Some("final"));

        let deleted = repo.delete_by_id(1).await.unwrap().unwrap();
        assert_eq!(deleted.id, 1);
        assert!(repo.find_by_id(1).await.unwrap().is_none());
        assert_eq!(repo.task_count(), 0);
    }

    #[tokio::test]
    async fn injected_error_fires_once() {
        let repo = MockTaskRepository::new();
        repo.inject_error(TaskError::Database("boom".to_string()));

        let err = repo.list().await.unwrap_err();
        assert!(err.is_database());

        // Error is consumed; the next call succeeds
        assert!(repo.list().await.is_ok());
    }

    #[tokio::test]
    async fn call_history_is_recorded() {
        let repo = MockTaskRepository::new();
        let _ = repo.health_check().await;
        let _ = repo.list().await;
        assert_eq!(repo.call_history(), vec!["health_check", "list"]);
    }
}
