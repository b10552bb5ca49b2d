//! MCP tool for the system snapshot.

use std::time::Instant;

use rmcp::{
    ErrorData as McpError, handler::server::router::tool::ToolRouter, model::*, tool, tool_router,
};

use crate::system;

#[derive(Clone)]
pub struct SystemTools {
    started_at: Instant,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SystemTools {
    pub fn new(started_at: Instant) -> Self {
        Self {
            started_at,
            tool_router: Self::tool_router(),
        }
    }

    /// Get the tool router for this handler
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(description = "Get system information")]
    pub async fn system_info(&self) -> Result<CallToolResult, McpError> {
        let info = system::snapshot(self.started_at.elapsed());

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&info).unwrap(),
        )]))
    }
}
