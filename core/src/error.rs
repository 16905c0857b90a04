use thiserror::Error;

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Error types for the task service.
///
/// These cover the failure modes of task operations, from payload validation
/// to store failures. Each variant maps to an HTTP status code for API
/// responses. Absence of a task is not an error: lookups return `Ok(None)`.
///
/// # Examples
///
/// ```rust
/// use task_core::error::TaskError;
///
/// let err = TaskError::too_short("name", 5);
/// assert!(err.is_validation());
/// assert_eq!(err.status_code(), 400);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Payload failed shape validation
    #[error("validation failed on '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Identifier in the request path is not a valid task id
    #[error("malformed task id: '{0}'")]
    MalformedId(String),

    /// Store operation failed or the connection is unavailable
    #[error("database error: {0}")]
    Database(String),

    /// Internal system error
    #[error("internal error: {0}")]
    Internal(String),
}

impl TaskError {
    /// Create a validation error for a missing required field
    pub fn missing_field(field: &'static str) -> Self {
        Self::Validation {
            field,
            message: format!("'{field}' is required"),
        }
    }

    /// Create a validation error for a field shorter than `min` characters
    pub fn too_short(field: &'static str, min: usize) -> Self {
        Self::Validation {
            field,
            message: format!("'{field}' length must be at least {min} characters"),
        }
    }

    /// Check if this error indicates a validation problem
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation { .. })
    }

    /// Check if this error indicates a malformed identifier
    pub fn is_malformed_id(&self) -> bool {
        matches!(self, TaskError::MalformedId(_))
    }

    /// Check if this error indicates a store problem
    pub fn is_database(&self) -> bool {
        matches!(self, TaskError::Database(_))
    }

    /// Convert to the HTTP status code this error responds with
    pub fn status_code(&self) -> u16 {
        match self {
            TaskError::Validation { .. } => 400,
            TaskError::MalformedId(_) => 400,
            TaskError::Database(_) => 500,
            TaskError::Internal(_) => 500,
        }
    }
}
