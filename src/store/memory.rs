//! Mutex-guarded in-memory task store.

use std::sync::{Mutex, MutexGuard};

use crate::store::error::{StoreError, StoreResult};
use crate::store::models::{Task, TaskPatch};
use crate::store::repository::TaskStore;
use crate::store::utils::{current_timestamp, epoch_millis};

struct StoreInner {
    tasks: Vec<Task>,
    next_id: u64,
}

/// In-memory task store.
///
/// One mutex guards the whole store, so every operation (including its
/// validation and id assignment) is atomic with respect to concurrent
/// callers on other request tasks.
pub struct MemoryTaskStore {
    inner: Mutex<StoreInner>,
}

impl MemoryTaskStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                tasks: Vec::new(),
                next_id: 0,
            }),
        }
    }

    /// A store pre-populated with the two demo tasks the UI ships with.
    pub fn with_sample_tasks() -> Self {
        let tasks = vec![
            Task {
                id: "1".to_string(),
                title: "Setup API Server".to_string(),
                description: "Create HTTP API endpoints for task management".to_string(),
                completed: true,
                created_at: "2024-01-15T10:00:00Z".to_string(),
                updated_at: "2024-01-15T10:00:00Z".to_string(),
            },
            Task {
                id: "2".to_string(),
                title: "Implement MCP Server".to_string(),
                description: "Expose the task operations as MCP tools".to_string(),
                completed: false,
                created_at: "2024-01-15T11:00:00Z".to_string(),
                updated_at: "2024-01-15T11:00:00Z".to_string(),
            },
        ];
        Self {
            inner: Mutex::new(StoreInner { tasks, next_id: 3 }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // Operations never panic while holding the lock, so a poisoned
        // guard still holds consistent data.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    // Millisecond timestamps read well in demo data but collide under
    // rapid creation; the counter keeps ids unique and increasing.
    fn allocate_id(inner: &mut StoreInner) -> String {
        let id = epoch_millis().max(inner.next_id);
        inner.next_id = id + 1;
        id.to_string()
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for MemoryTaskStore {
    fn list(&self) -> StoreResult<Vec<Task>> {
        Ok(self.lock().tasks.clone())
    }

    fn get(&self, id: &str) -> StoreResult<Task> {
        self.lock()
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn create(&self, title: &str, description: &str) -> StoreResult<Task> {
        if title.is_empty() || description.is_empty() {
            return Err(StoreError::validation(
                "Title and description are required",
            ));
        }

        let mut inner = self.lock();
        let now = current_timestamp();
        let task = Task {
            id: Self::allocate_id(&mut inner),
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            created_at: now.clone(),
            updated_at: now,
        };
        inner.tasks.push(task.clone());
        Ok(task)
    }

    fn update(&self, id: &str, patch: TaskPatch) -> StoreResult<Task> {
        let mut inner = self.lock();
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        patch.apply_to(task);
        task.updated_at = current_timestamp();
        Ok(task.clone())
    }

    fn delete(&self, id: &str) -> StoreResult<Task> {
        let mut inner = self.lock();
        let index = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        Ok(inner.tasks.remove(index))
    }
}
