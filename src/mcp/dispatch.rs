//! Name-to-operation dispatch for the HTTP tool-call envelope.
//!
//! `POST /api/v1/tools/call` carries `{toolName, parameters}`. This table
//! routes the name to the store, the workspace, or the system snapshot,
//! validating required parameters before any state is touched.

use std::sync::Arc;
use std::time::Instant;

use miette::Diagnostic;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::files::{FilesError, Workspace};
use crate::mcp::tools::{CreateTaskParams, DeleteTaskParams, ReadFileParams, UpdateTaskParams};
use crate::store::{StoreError, TaskPatch, TaskStore};
use crate::system;

/// Tool invocation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {name}")]
    #[diagnostic(code(taskdeck::tools::unknown_tool))]
    UnknownTool { name: String },

    #[error("{message}")]
    #[diagnostic(code(taskdeck::tools::invalid_params))]
    InvalidParams { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Files(#[from] FilesError),

    #[error("Internal error: {message}")]
    #[diagnostic(code(taskdeck::tools::internal))]
    Internal { message: String },
}

impl ToolError {
    fn invalid_params(message: &str) -> Self {
        Self::InvalidParams {
            message: message.to_string(),
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal {
            message: e.to_string(),
        }
    }
}

/// Routes tool calls from the HTTP envelope to the shared collaborators.
///
/// Holds the same store instance the REST handlers and the MCP service
/// use, so mutations are visible across every surface.
pub struct ToolDispatcher<S: TaskStore> {
    store: Arc<S>,
    workspace: Workspace,
    started_at: Instant,
}

impl<S: TaskStore> ToolDispatcher<S> {
    pub fn new(store: Arc<S>, workspace: Workspace, started_at: Instant) -> Self {
        Self {
            store,
            workspace,
            started_at,
        }
    }

    /// Invoke `name` with `parameters`, returning the operation's JSON
    /// payload.
    pub fn dispatch(&self, name: &str, parameters: Value) -> Result<Value, ToolError> {
        match name {
            "list_tasks" => {
                let tasks = self.store.list()?;
                Ok(serde_json::to_value(tasks)?)
            }
            "create_task" => {
                let params: CreateTaskParams =
                    parse_params(parameters, "Title and description are required")?;
                let task = self.store.create(&params.title, &params.description)?;
                Ok(serde_json::to_value(task)?)
            }
            "update_task" => {
                let params: UpdateTaskParams = parse_params(parameters, "Task ID is required")?;
                if params.id.is_empty() {
                    return Err(ToolError::invalid_params("Task ID is required"));
                }
                let patch = TaskPatch {
                    title: params.title,
                    description: params.description,
                    completed: params.completed,
                };
                let task = self.store.update(&params.id, patch)?;
                Ok(serde_json::to_value(task)?)
            }
            "delete_task" => {
                let params: DeleteTaskParams = parse_params(parameters, "Task ID is required")?;
                if params.id.is_empty() {
                    return Err(ToolError::invalid_params("Task ID is required"));
                }
                let task = self.store.delete(&params.id)?;
                Ok(serde_json::to_value(task)?)
            }
            "read_file" => {
                let params: ReadFileParams = parse_params(parameters, "File path is required")?;
                if params.path.is_empty() {
                    return Err(ToolError::invalid_params("File path is required"));
                }
                let file = self.workspace.read(&params.path)?;
                Ok(serde_json::to_value(file)?)
            }
            "list_files" => {
                let entries = self.workspace.list()?;
                Ok(serde_json::to_value(entries)?)
            }
            "system_info" => {
                let info = system::snapshot(self.started_at.elapsed());
                Ok(serde_json::to_value(info)?)
            }
            _ => Err(ToolError::UnknownTool {
                name: name.to_string(),
            }),
        }
    }
}

/// Deserialize a parameter struct, collapsing any shape mismatch into the
/// tool's required-parameter message.
fn parse_params<T: DeserializeOwned>(parameters: Value, message: &str) -> Result<T, ToolError> {
    serde_json::from_value(parameters).map_err(|_| ToolError::invalid_params(message))
}
