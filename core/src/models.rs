use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task document as persisted in the store.
///
/// Tasks carry a store-assigned numeric identifier, a mandatory name and an
/// optional free-text description. `created_at` is assigned on insertion and
/// never interpreted by the application.
///
/// # Examples
///
/// ```rust
/// use task_core::models::Task;
/// use chrono::Utc;
///
/// let task = Task {
///     id: 42,
///     name: "Write the report".to_string(),
///     description: Some("First draft".to_string()),
///     created_at: Utc::now(),
/// };
/// assert!(task.name.chars().count() >= 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Store-assigned primary key, immutable after creation
    pub id: i64,
    /// Task name, at least 5 characters
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Insertion timestamp, store-assigned metadata
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new task.
///
/// `name` is required and must be at least 5 characters; `description` may be
/// omitted. Shape validation happens in [`crate::validation::TaskValidator`]
/// before any store call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTask {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTask {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}

/// Partial-update payload for an existing task.
///
/// Both fields are optional; only the fields that are present are written.
/// A present `name` obeys the same length rule as on creation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpdateTask {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateTask {
    /// True when the payload carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_without_description() {
        let payload: NewTask = serde_json::from_str(r#"{"name":"Write report"}"#).unwrap();
        assert_eq!(payload.name, "Write report");
        assert!(payload.description.is_none());
    }

    #[test]
    fn new_task_with_description() {
        let payload: NewTask =
            serde_json::from_str(r#"{"name":"Write report","description":"draft"}"#).unwrap();
        assert_eq!(payload.description.as_deref(), Some("draft"));
    }

    #[test]
    fn update_task_is_empty() {
        let empty: UpdateTask = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());

        let partial: UpdateTask = serde_json::from_str(r#"{"description":"final"}"#).unwrap();
        assert!(!partial.is_empty());
        assert!(partial.name.is_none());
        assert_eq!(partial.description.as_deref(), Some("final"));
    }

    #[test]
    fn task_serializes_null_description() {
        let task = Task {
            id: 1,
            name: "Write report".to_string(),
            description: None,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], 1);
        assert!(value["description"].is_null());
    }
}
