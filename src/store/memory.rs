//! In-memory implementation of the task store

use std::collections::BTreeMap;

use crate::domain::{Task, TaskError, TaskId};

use super::TaskStore;

/// The canonical in-process task collection.
///
/// Tasks are keyed by id in a `BTreeMap`; the next-id counter starts at
/// 1 and only ever grows, so key order and insertion order coincide and
/// `get_all` needs no auxiliary sequence. State lives for the lifetime
/// of one store instance and is discarded with it.
#[derive(Debug)]
pub struct MemoryStore {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: TaskId::new(1),
        }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for MemoryStore {
    fn add(&mut self, mut task: Task) -> Task {
        task.id = self.next_id;
        self.next_id = self.next_id.next();
        self.tasks.insert(task.id, task.clone());
        task
    }

    fn get_all(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    fn get_by_id(&self, id: TaskId) -> Option<Task> {
        self.tasks.get(&id).cloned()
    }

    fn update(&mut self, task: Task) -> Result<Task, TaskError> {
        if !self.tasks.contains_key(&task.id) {
            return Err(TaskError::NotFound(task.id));
        }
        self.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    fn delete(&mut self, id: TaskId) -> bool {
        self.tasks.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(description: &str) -> Task {
        Task::new(description).unwrap()
    }

    #[test]
    fn add_assigns_sequential_ids_from_one() {
        let mut store = MemoryStore::new();
        let a = store.add(task("A"));
        let b = store.add(task("B"));
        let c = store.add(task("C"));
        assert_eq!(a.id, TaskId::new(1));
        assert_eq!(b.id, TaskId::new(2));
        assert_eq!(c.id, TaskId::new(3));
    }

    #[test]
    fn get_all_preserves_insertion_order() {
        let mut store = MemoryStore::new();
        for description in ["A", "B", "C"] {
            store.add(task(description));
        }
        let all: Vec<_> = store.get_all().into_iter().map(|t| t.description).collect();
        assert_eq!(all, ["A", "B", "C"]);
    }

    #[test]
    fn get_by_id_returns_none_for_missing() {
        let mut store = MemoryStore::new();
        let stored = store.add(task("Present"));
        assert_eq!(store.get_by_id(stored.id).unwrap().description, "Present");
        assert!(store.get_by_id(TaskId::new(99)).is_none());
    }

    #[test]
    fn update_replaces_existing_record() {
        let mut store = MemoryStore::new();
        let mut stored = store.add(task("Before"));
        stored.rename("After").unwrap();
        let updated = store.update(stored).unwrap();
        assert_eq!(updated.description, "After");
        assert_eq!(store.get_by_id(updated.id).unwrap().description, "After");
    }

    #[test]
    fn update_of_missing_id_is_not_found_and_does_not_insert() {
        let mut store = MemoryStore::new();
        let mut ghost = task("Ghost");
        ghost.id = TaskId::new(7);
        assert_eq!(
            store.update(ghost),
            Err(TaskError::NotFound(TaskId::new(7)))
        );
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn delete_reports_whether_a_removal_occurred() {
        let mut store = MemoryStore::new();
        let stored = store.add(task("Ephemeral"));
        assert!(store.delete(stored.id));
        assert!(!store.delete(stored.id));
        assert!(store.get_by_id(stored.id).is_none());
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn ids_are_never_reused_after_deletion() {
        let mut store = MemoryStore::new();
        let first = store.add(task("First"));
        assert!(store.delete(first.id));
        let second = store.add(task("Second"));
        assert!(second.id > first.id);
        assert_eq!(second.id, TaskId::new(2));
    }
}
