//! Domain model for the task manager.
//!
//! Tasks serialize with camelCase keys because the same JSON shape is used
//! by every boundary: the REST responses, the tool-call payloads, and the
//! MCP tool results.

use serde::{Deserialize, Serialize};

/// A single unit of work in the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque identifier, assigned at creation.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Starts out false for every new task.
    pub completed: bool,
    /// Fixed at creation (RFC 3339).
    pub created_at: String,
    /// Refreshed on every mutation (RFC 3339).
    pub updated_at: String,
}

/// Partial update for an existing task.
///
/// A `None` field leaves the current value unchanged. A present value is
/// applied verbatim, so an explicit empty title or `completed: false` does
/// take effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Set the present fields on `task`. Timestamps are the store's
    /// responsibility and are not touched here.
    pub(crate) fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}
