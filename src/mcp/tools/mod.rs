//! MCP tool implementations
//!
//! Tool handlers organized by domain: task CRUD, workspace files, and the
//! system snapshot. The parameter structs defined here are shared with the
//! HTTP tool dispatcher, so both surfaces accept identical arguments.

mod files;
mod system;
mod tasks;


pub use files::{FileTools, ReadFileParams};
pub use system::SystemTools;
pub use tasks::{CreateTaskParams, DeleteTaskParams, TaskTools, UpdateTaskParams};

use rmcp::ErrorData as McpError;
use serde_json::json;

use crate::files::FilesError;
use crate::store::StoreError;

/// Translate store failures into MCP error responses.
pub(crate) fn map_store_error(e: StoreError) -> McpError {
    let data = Some(json!({"error": e.to_string()}));
    match e {
        StoreError::NotFound { .. } => McpError::resource_not_found("task_not_found", data),
        StoreError::Validation { .. } => McpError::invalid_params("validation_error", data),
    }
}

/// Translate workspace failures into MCP error responses.
pub(crate) fn map_files_error(e: FilesError) -> McpError {
    let data = Some(json!({"error": e.to_string()}));
    match e {
        FilesError::NotFound { .. } => McpError::resource_not_found("file_not_found", data),
        FilesError::InvalidPath { .. } => McpError::invalid_params("invalid_path", data),
        FilesError::Io { .. } => McpError::internal_error("file_system_error", data),
    }
}
