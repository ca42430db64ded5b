//! # Storage Layer
//!
//! The [`TaskStore`] trait is the contract any backend must satisfy;
//! [`MemoryStore`] is the only implementation today. Operations depend
//! on the trait, not the concrete store, so a persistent backend could
//! be substituted without touching them.
//!
//! The contract is deliberately minimal:
//!
//! | Method | Behavior |
//! |--------|----------|
//! | `add` | Assigns a fresh id, stores the task, returns it |
//! | `get_all` | Every live task, in insertion order |
//! | `get_by_id` | `Option`; absence is not an error here |
//! | `update` | Replaces an existing record, `NotFound` otherwise |
//! | `delete` | Removes if present, reports whether it did |

mod memory;

pub use memory::MemoryStore;

use crate::domain::{Task, TaskError, TaskId};

/// Abstract storage contract for tasks.
pub trait TaskStore {
    /// Assigns a fresh unique id to `task`, stores it, and returns the
    /// stored value. Ids are never reused within the store's lifetime,
    /// even after deletions.
    fn add(&mut self, task: Task) -> Task;

    /// Returns every stored task in the order it was added.
    fn get_all(&self) -> Vec<Task>;

    /// Returns the task with the given id, or `None` if absent.
    fn get_by_id(&self, id: TaskId) -> Option<Task>;

    /// Replaces the stored record for `task.id` with the given value.
    /// Fails with [`TaskError::NotFound`] when no such record exists;
    /// it never silently inserts.
    fn update(&mut self, task: Task) -> Result<Task, TaskError>;

    /// Removes the record with the given id if present. Reports whether
    /// a removal occurred; a missing id is `false`, not an error.
    fn delete(&mut self, id: TaskId) -> bool;
}
