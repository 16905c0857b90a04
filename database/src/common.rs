use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use task_core::{
    error::{Result, TaskError},
    models::Task,
};

/// Columns every task query must select, in row_to_task order
pub const TASK_COLUMNS: &str = "id, name, description, created_at";

/// Convert a SQLite row to the Task model
pub fn row_to_task(row: &SqliteRow) -> Result<Task> {
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| TaskError::Database(format!("invalid created_at column: {e}")))?;

    Ok(Task {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        created_at,
    })
}

/// Convert a sqlx error to the domain error type
pub fn sqlx_error_to_task_error(err: sqlx::Error) -> TaskError {
    match &err {
        sqlx::Error::Database(db_err) => {
            TaskError::Database(format!("database operation failed: {}", db_err.message()))
        }
        sqlx::Error::PoolTimedOut => TaskError::Database("connection pool timeout".to_string()),
        sqlx::Error::Io(io_err) => TaskError::Database(format!("database I/O error: {io_err}")),
        _ => TaskError::Database(format!("database operation failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_mapping() {
        let err = sqlx_error_to_task_error(sqlx::Error::PoolTimedOut);
        assert!(err.is_database());
        assert_eq!(format!("{err}"), "database error: connection pool timeout");
    }

    #[test]
    fn test_row_not_found_mapping() {
        let err = sqlx_error_to_task_error(sqlx::Error::RowNotFound);
        assert!(err.is_database());
    }
}
