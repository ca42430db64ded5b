//! Task domain model
//!
//! A task is one short line of text with a completion flag. The store
//! assigns its id; the entity only guards the description invariant: a
//! task never exists with an empty or whitespace-only description.

use serde::{Deserialize, Serialize};

use super::error::TaskError;
use super::id::TaskId;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store
    pub id: TaskId,

    /// Human-readable description, trimmed and never empty
    pub description: String,

    /// Whether the task is done
    pub completed: bool,
}

impl Task {
    /// Creates a new, not-yet-stored task.
    ///
    /// The id is the unassigned placeholder until the store's `add`
    /// numbers it. Fails with [`TaskError::Validation`] when the
    /// description trims to nothing.
    pub fn new(description: &str) -> Result<Self, TaskError> {
        Ok(Self {
            id: TaskId::default(),
            description: normalize_description(description)?,
            completed: false,
        })
    }

    /// Replaces the description, trimming and revalidating it.
    /// The completion flag is untouched.
    pub fn rename(&mut self, description: &str) -> Result<(), TaskError> {
        self.description = normalize_description(description)?;
        Ok(())
    }

    /// Flips the completion flag. Applying this twice restores the
    /// original state; there is deliberately no one-way "mark done".
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Renders the task as `<id>. [<mark>] <description>` with a
    /// checkmark for completed tasks and a space otherwise.
    pub fn render(&self) -> String {
        let mark = if self.completed { '✓' } else { ' ' };
        format!("{}. [{}] {}", self.id, mark, self.description)
    }
}

/// Trims the description and rejects blank input.
pub(crate) fn normalize_description(description: &str) -> Result<String, TaskError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(TaskError::empty_description());
    }
    Ok(trimmed.to_string())
}
