//! Failure taxonomy shared by every operation

use thiserror::Error;

use super::id::TaskId;

/// Errors raised by task operations.
///
/// Both variants are caller-input problems, not transient failures:
/// the shell renders them and carries on, it never retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// The referenced task id has no live record
    #[error("Task with ID {0} not found")]
    NotFound(TaskId),

    /// The supplied description is empty or whitespace-only
    #[error("{0}")]
    Validation(String),

    /// Interactive input that does not parse as a task id
    #[error("Invalid task ID")]
    InvalidId(String),
}

impl TaskError {
    /// The standard validation failure for a blank description
    pub fn empty_description() -> Self {
        TaskError::Validation("Task description cannot be empty".to_string())
    }
}
