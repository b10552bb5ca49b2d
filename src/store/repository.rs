//! Trait definition for task data access.
//!
//! Handlers and tools depend on this trait rather than a concrete store,
//! so tests can inject an empty store and the binary a seeded one.

use crate::store::{StoreResult, Task, TaskPatch};

/// Storage contract for tasks.
///
/// Implementations must make each operation atomic: validate-then-mutate
/// happens under a single lock acquisition so concurrent callers never
/// observe partial updates or race on id assignment.
pub trait TaskStore: Send + Sync {
    /// All tasks in insertion order.
    fn list(&self) -> StoreResult<Vec<Task>>;

    /// Look up a task by id.
    fn get(&self, id: &str) -> StoreResult<Task>;

    /// Create a task. Title and description must be non-empty.
    fn create(&self, title: &str, description: &str) -> StoreResult<Task>;

    /// Merge a patch into an existing task and refresh its `updated_at`.
    fn update(&self, id: &str, patch: TaskPatch) -> StoreResult<Task>;

    /// Remove a task, returning the removed record.
    fn delete(&self, id: &str) -> StoreResult<Task>;
}
