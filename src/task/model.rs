//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a task.
///
/// Serialized in kebab-case (`todo`, `in-progress`, `done`); these are the
/// only values that ever appear in the task file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Not started
    Todo,
    /// Being worked on
    InProgress,
    /// Completed
    Done,
}

impl Status {
    /// Parse a status from its text form.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID, allocated as max(existing)+1 and never reused
    pub id: u64,

    /// Task description, never empty
    pub description: String,

    /// Current status
    pub status: Status,
}

impl Task {
    /// Create a new task. New tasks always start as todo.
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            status: Status::Todo,
        }
    }
}
