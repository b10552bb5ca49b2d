//! MCP tools for task management.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::mcp::tools::map_store_error;
use crate::store::{TaskPatch, TaskStore};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "Task title")]
    pub title: String,
    #[schemars(description = "Task description")]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Task ID")]
    pub id: String,
    #[schemars(description = "Task title")]
    pub title: Option<String>,
    #[schemars(description = "Task description")]
    pub description: Option<String>,
    #[schemars(description = "Task completion status")]
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTaskParams {
    #[schemars(description = "Task ID")]
    pub id: String,
}

// =============================================================================
// Task Tools
// =============================================================================

#[derive(Clone)]
pub struct TaskTools<S: TaskStore> {
    store: Arc<S>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl<S: TaskStore + 'static> TaskTools<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    /// Get the tool router for this handler
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(description = "Get all tasks from the task manager")]
    pub async fn list_tasks(&self) -> Result<CallToolResult, McpError> {
        let tasks = self.store.list().map_err(map_store_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&tasks).unwrap(),
        )]))
    }

    #[tool(description = "Create a new task")]
    pub async fn create_task(
        &self,
        params: Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let task = self
            .store
            .create(&params.0.title, &params.0.description)
            .map_err(map_store_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&task).unwrap(),
        )]))
    }

    #[tool(description = "Update an existing task")]
    pub async fn update_task(
        &self,
        params: Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let patch = TaskPatch {
            title: params.0.title.clone(),
            description: params.0.description.clone(),
            completed: params.0.completed,
        };
        let task = self
            .store
            .update(&params.0.id, patch)
            .map_err(map_store_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&task).unwrap(),
        )]))
    }

    #[tool(description = "Delete a task")]
    pub async fn delete_task(
        &self,
        params: Parameters<DeleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let task = self.store.delete(&params.0.id).map_err(map_store_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&task).unwrap(),
        )]))
    }
}
