//! The five task operations
//!
//! Each operation validates its input, orchestrates the store through
//! the [`TaskStore`] contract, and returns the affected task or a
//! [`TaskError`]. Nothing here retries or recovers; both error kinds
//! are caller-input problems that the shell renders.

use crate::domain::{normalize_description, Task, TaskError, TaskId};
use crate::store::TaskStore;

/// Adds a task with the given description.
///
/// Trims the description, rejects blank input with
/// [`TaskError::Validation`], and returns the stored task carrying its
/// assigned id.
pub fn add_task(store: &mut dyn TaskStore, description: &str) -> Result<Task, TaskError> {
    let task = Task::new(description)?;
    Ok(store.add(task))
}

/// Returns every task, in insertion order. An empty store yields an
/// empty list, not an error.
pub fn view_tasks(store: &dyn TaskStore) -> Vec<Task> {
    store.get_all()
}

/// Toggles a task between complete and incomplete.
///
/// This is a toggle, not a one-way "mark complete": applying it twice
/// to the same id restores the original state. Fails with
/// [`TaskError::NotFound`] when the id has no record.
pub fn toggle_task(store: &mut dyn TaskStore, id: TaskId) -> Result<Task, TaskError> {
    let mut task = store.get_by_id(id).ok_or(TaskError::NotFound(id))?;
    task.toggle();
    store.update(task)
}

/// Replaces a task's description, leaving its completion flag unchanged.
///
/// The new description is validated before the lookup, so a blank
/// description reports [`TaskError::Validation`] even for an id that
/// does not exist.
pub fn update_task(
    store: &mut dyn TaskStore,
    id: TaskId,
    description: &str,
) -> Result<Task, TaskError> {
    let description = normalize_description(description)?;
    let mut task = store.get_by_id(id).ok_or(TaskError::NotFound(id))?;
    task.rename(&description)?;
    store.update(task)
}

/// Deletes a task.
///
/// The raw store delete merely reports `false` for a missing id; this
/// operation checks existence first so callers get an explicit
/// [`TaskError::NotFound`].
pub fn delete_task(store: &mut dyn TaskStore, id: TaskId) -> Result<(), TaskError> {
    if store.get_by_id(id).is_none() {
        return Err(TaskError::NotFound(id));
    }
    store.delete(id);
    Ok(())
}
