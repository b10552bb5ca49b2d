//! MCP tools for workspace file access.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::files::Workspace;
use crate::mcp::tools::map_files_error;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ReadFileParams {
    #[schemars(description = "File path to read")]
    pub path: String,
}

#[derive(Clone)]
pub struct FileTools {
    workspace: Workspace,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FileTools {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            tool_router: Self::tool_router(),
        }
    }

    /// Get the tool router for this handler
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(description = "Read contents of a file")]
    pub async fn read_file(
        &self,
        params: Parameters<ReadFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let file = self
            .workspace
            .read(&params.0.path)
            .map_err(map_files_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&file).unwrap(),
        )]))
    }

    #[tool(description = "List files in the workspace")]
    pub async fn list_files(&self) -> Result<CallToolResult, McpError> {
        let entries = self.workspace.list().map_err(map_files_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&entries).unwrap(),
        )]))
    }
}
