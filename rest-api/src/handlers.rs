//! Route handlers for the task API
//!
//! Each handler is stateless per request: extract, validate, call the
//! injected repository, translate the result. Validation short-circuits
//! before the repository is touched, so an invalid payload never reaches the
//! store. Absence (`Ok(None)` from the repository) is a success and
//! serializes as a `null` body.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;
use task_core::{NewTask, Task, TaskRepository, TaskValidator, UpdateTask};

use crate::error::ApiError;

/// Fixed greeting returned by the root route
pub const GREETING: &str = "Hello World!";

/// GET `/`
pub async fn root() -> &'static str {
    GREETING
}

/// POST `/tasks`
pub async fn create_task<R: TaskRepository>(
    State(repo): State<Arc<R>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let payload = require_payload(payload)?;
    TaskValidator::validate_new_task(&payload)?;

    let task = repo.create(payload).await?;
    tracing::info!(task_id = task.id, "task created");
    Ok(Json(task))
}

/// GET `/tasks`
pub async fn list_tasks<R: TaskRepository>(
    State(repo): State<Arc<R>>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = repo.list().await?;
    tracing::debug!(count = tasks.len(), "listed tasks");
    Ok(Json(tasks))
}

/// GET `/tasks/:id`
pub async fn get_task<R: TaskRepository>(
    State(repo): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<Option<Task>>, ApiError> {
    let id = parse_id(&id)?;
    let task = repo.find_by_id(id).await?;
    Ok(Json(task))
}

/// PUT `/tasks/:id`
pub async fn update_task<R: TaskRepository>(
    State(repo): State<Arc<R>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTask>, JsonRejection>,
) -> Result<Json<Option<Task>>, ApiError> {
    let id = parse_id(&id)?;
    let updates = require_payload(payload)?;
    TaskValidator::validate_update(&updates)?;

    let task = repo.update_by_id(id, updates).await?;
    if task.is_some() {
        tracing::info!(task_id = id, "task updated");
    }
    Ok(Json(task))
}

/// DELETE `/tasks/:id`
pub async fn delete_task<R: TaskRepository>(
    State(repo): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<Option<Task>>, ApiError> {
    let id = parse_id(&id)?;
    let task = repo.delete_by_id(id).await?;
    if task.is_some() {
        tracing::info!(task_id = id, "task deleted");
    }
    Ok(Json(task))
}

/// Parse a path segment into a task id, rejecting anything non-numeric
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::MalformedId(raw.to_string()))
}

/// Unwrap a body extractor result, mapping rejections to validation errors
fn require_payload<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::bad_payload(rejection.body_text())),
    }
}
