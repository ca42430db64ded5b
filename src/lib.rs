//! Slate - a minimal in-memory task list for the terminal
//!
//! Slate keeps a list of short text tasks with completion flags,
//! reachable through an interactive menu or one-shot commands. State is
//! memory-only and scoped to the process; nothing persists across runs.

pub mod cli;
pub mod domain;
pub mod ops;
pub mod store;

pub use domain::{Task, TaskError, TaskId};
pub use store::{MemoryStore, TaskStore};
