//! In-memory task storage.
//!
//! The store is the single source of truth for tasks: the REST handlers,
//! the HTTP tool dispatcher, and the MCP service all operate on the same
//! instance behind an `Arc`.
//!
//! # Architecture
//!
//! - `error`: Storage error types
//! - `models`: The `Task` entity and its partial-update patch
//! - `repository`: Trait definition for task data access
//! - `memory`: Mutex-guarded in-memory implementation

mod error;
mod memory;
mod models;
mod repository;
mod utils;


pub use error::{StoreError, StoreResult};
pub use memory::MemoryTaskStore;
pub use models::{Task, TaskPatch};
pub use repository::TaskStore;
pub use utils::current_timestamp;
