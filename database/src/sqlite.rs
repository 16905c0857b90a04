use crate::common::{row_to_task, sqlx_error_to_task_error, TASK_COLUMNS};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use task_core::{
    error::{Result, TaskError},
    models::{NewTask, Task, UpdateTask},
    repository::TaskRepository,
};

/// SQLite implementation of the TaskRepository trait
///
/// The pool is created lazily: constructing the repository never touches the
/// filesystem, and a store that is unavailable at startup surfaces as
/// `TaskError::Database` on the first operation instead of aborting the
/// process. Call [`SqliteTaskRepository::migrate`] once at startup to probe
/// the connection and apply the schema.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Create a new SQLite repository with the given database URL
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (file path or `:memory:`)
    /// * `max_connections` - Pool size for file-backed databases
    ///
    /// # Examples
    /// ```rust,no_run
    /// use database::SqliteTaskRepository;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // In-memory database for testing
    /// let repo = SqliteTaskRepository::new(":memory:", 5)?;
    ///
    /// // File-based database
    /// let repo = SqliteTaskRepository::new("sqlite:///tmp/tasks.db", 5)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let in_memory = database_url.contains(":memory:");

        let connect_options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| TaskError::Database(format!("invalid database URL: {e}")))?
            .create_if_missing(true)
            .busy_timeout(std::time::Duration::from_secs(5))
            .journal_mode(if in_memory {
                SqliteJournalMode::Memory
            } else {
                SqliteJournalMode::Wal
            });

        // A pooled :memory: database is one database per connection; cap the
        // pool at a single connection so every operation sees the same data.
        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { max_connections })
            .connect_lazy_with(connect_options);

        Ok(Self { pool })
    }

    /// Apply the embedded schema migration
    ///
    /// This is also the startup connection probe: it forces the lazy pool to
    /// open its first connection.
    ///
    /// # Returns
    /// * `Ok(())` - Store reachable, schema up to date
    /// * `Err(TaskError::Database)` - Store unavailable or migration failed
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| TaskError::Database(format!("migration failed: {e}")))?;

        tracing::info!("database migrations completed");
        Ok(())
    }

    /// Access the underlying pool, primarily for tests
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, task: NewTask) -> Result<Task> {
        let now = Utc::now();

        let sql = format!(
            "INSERT INTO tasks (name, description, created_at) VALUES (?, ?, ?) \
             RETURNING {TASK_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&task.name)
            .bind(&task.description)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        row_to_task(&row)
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        rows.iter().map(row_to_task).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?");
        let result = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        match result {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_by_id(&self, id: i64, updates: UpdateTask) -> Result<Option<Task>> {
        // Nothing to write; report the current row (or absence) unchanged
        if updates.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut query_builder: sqlx::QueryBuilder<sqlx::Sqlite> =
            sqlx::QueryBuilder::new("UPDATE tasks SET ");
        let mut has_updates = false;

        if let Some(ref name) = updates.name {
            query_builder.push("name = ");
            query_builder.push_bind(name);
            has_updates = true;
        }

        if let Some(ref description) = updates.description {
            if has_updates {
                query_builder.push(", ");
            }
            query_builder.push("description = ");
            query_builder.push_bind(description);
        }

        query_builder.push(" WHERE id = ");
        query_builder.push_bind(id);
        query_builder.push(format!(" RETURNING {TASK_COLUMNS}"));

        let result = query_builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        match result {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Task>> {
        let sql = format!("DELETE FROM tasks WHERE id = ? RETURNING {TASK_COLUMNS}");
        let result = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        match result {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(())
    }
}
