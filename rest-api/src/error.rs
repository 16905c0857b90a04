//! HTTP error mapping
//!
//! Translates domain errors into HTTP responses with a uniform structured
//! body. Absence of a task is not an error and never reaches this type; it
//! is serialized as a `null` success body by the handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use task_core::TaskError;
use thiserror::Error;

/// Errors surfaced to HTTP clients
///
/// Every variant responds with `{"error": {"kind", "message", "field"}}`;
/// `field` is present only for validation failures.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation failed on '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("malformed task id: '{0}'")]
    MalformedId(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Validation error for a request body that failed to deserialize
    pub fn bad_payload(message: String) -> Self {
        Self::Validation {
            field: "payload",
            message,
        }
    }

    /// Stable machine-readable tag for the error body
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation",
            ApiError::MalformedId(_) => "malformed_id",
            ApiError::Database(_) => "database",
            ApiError::Internal(_) => "internal",
        }
    }

    /// HTTP status this error responds with
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::MalformedId(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::Validation { field, message } => ApiError::Validation { field, message },
            TaskError::MalformedId(id) => ApiError::MalformedId(id),
            TaskError::Database(msg) => ApiError::Database(msg),
            TaskError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let field = match &self {
            ApiError::Validation { field, .. } => Some(*field),
            _ => None,
        };
        let body = json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
                "field": field,
            }
        });

        (status, Json(body)).into_response()
    }
}
