//! Task identifiers
//!
//! Ids are positive integers assigned by the store at creation time and
//! never supplied by callers for new tasks. They increase strictly for
//! the life of a store and are not reused after deletion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TaskError;

/// Identifier of a stored task.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw id value. Zero is the unassigned placeholder a task
    /// carries before the store numbers it.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw integer value
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id following this one
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<u64>() {
            Ok(raw) if raw > 0 => Ok(Self(raw)),
            _ => Err(TaskError::InvalidId(s.to_string())),
        }
    }
}
