use crate::{
    error::{Result, TaskError},
    models::{NewTask, UpdateTask},
};

/// Minimum number of characters a task name must have
pub const MIN_NAME_LEN: usize = 5;

/// Payload validation for task operations.
///
/// Validation runs before any store call and short-circuits on the FIRST
/// violated rule, so callers always receive a single structured error. The
/// only business rule is presence and length of `name`; `description` is
/// unconstrained beyond being a string, which deserialization enforces.
pub struct TaskValidator;

impl TaskValidator {
    /// Validate a task name
    ///
    /// Names must be at least [`MIN_NAME_LEN`] characters long, counted in
    /// characters rather than bytes.
    pub fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(TaskError::missing_field("name"));
        }
        if name.chars().count() < MIN_NAME_LEN {
            return Err(TaskError::too_short("name", MIN_NAME_LEN));
        }
        Ok(())
    }

    /// Validate a create payload
    pub fn validate_new_task(task: &NewTask) -> Result<()> {
        Self::validate_name(&task.name)
    }

    /// Validate a partial-update payload
    ///
    /// All fields are optional; a present `name` obeys the same rule as on
    /// creation.
    pub fn validate_update(updates: &UpdateTask) -> Result<()> {
        if let Some(ref name) = updates.name {
            Self::validate_name(name)?;
        }
        Ok(())
    }
}
