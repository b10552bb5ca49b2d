//! MCP server coordinator.
//!
//! Aggregates the per-domain tool handlers behind one `ServerHandler`:
//! task CRUD, workspace file access, and the system snapshot. This type
//! only routes between the handlers; each handler owns its own tool
//! router and parameter validation.

use std::sync::Arc;
use std::time::Instant;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Implementation, ListToolsResult,
        PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
};

use crate::files::Workspace;
use crate::store::TaskStore;

use super::tools::{FileTools, SystemTools, TaskTools};

/// Tool names owned by each domain handler.
const TASK_TOOLS: [&str; 4] = ["list_tasks", "create_task", "update_task", "delete_task"];
const FILE_TOOLS: [&str; 2] = ["read_file", "list_files"];
const SYSTEM_TOOLS: [&str; 1] = ["system_info"];

/// Main MCP server coordinator
///
/// Generic over `S: TaskStore` so the binary and the tests can inject
/// different store setups without dynamic dispatch. The store `Arc` is
/// the same instance the REST handlers use.
#[derive(Clone)]
pub struct McpServer<S: TaskStore> {
    task_tools: TaskTools<S>,
    file_tools: FileTools,
    system_tools: SystemTools,
}

impl<S: TaskStore + 'static> McpServer<S> {
    pub fn new(store: Arc<S>, workspace: Workspace, started_at: Instant) -> Self {
        Self {
            task_tools: TaskTools::new(store),
            file_tools: FileTools::new(workspace),
            system_tools: SystemTools::new(started_at),
        }
    }
}

impl<S: TaskStore + 'static> ServerHandler for McpServer<S> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "taskdeck-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("TaskDeck MCP Server".to_string()),
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "TaskDeck MCP Server - Manage the shared task list, read workspace files, \
                 and inspect the host process"
                    .to_string(),
            ),
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        if TASK_TOOLS.contains(&request.name.as_ref()) {
            let tcc = rmcp::handler::server::tool::ToolCallContext::new(
                &self.task_tools,
                request,
                context,
            );
            return self.task_tools.router().call(tcc).await;
        }
        if FILE_TOOLS.contains(&request.name.as_ref()) {
            let tcc = rmcp::handler::server::tool::ToolCallContext::new(
                &self.file_tools,
                request,
                context,
            );
            return self.file_tools.router().call(tcc).await;
        }
        if SYSTEM_TOOLS.contains(&request.name.as_ref()) {
            let tcc = rmcp::handler::server::tool::ToolCallContext::new(
                &self.system_tools,
                request,
                context,
            );
            return self.system_tools.router().call(tcc).await;
        }

        Err(McpError::invalid_params(
            format!("Unknown tool: {}", request.name),
            None,
        ))
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let mut tools = self.task_tools.router().list_all();
        tools.extend(self.file_tools.router().list_all());
        tools.extend(self.system_tools.router().list_all());

        Ok(ListToolsResult {
            tools,
            meta: None,
            next_cursor: None,
        })
    }
}
