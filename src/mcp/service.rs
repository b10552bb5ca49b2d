//! MCP Streamable HTTP service creation
//!
//! This module provides the function that wraps the MCP server in a
//! streamable-HTTP tower service for nesting into an Axum router.

use std::sync::Arc;
use std::time::Instant;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::files::Workspace;
use crate::store::TaskStore;

use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// Every session gets its own `McpServer`, but all of them share the same
/// store `Arc` and workspace, so tool calls from different sessions (and
/// from the REST surface) observe the same task list.
///
/// # Example
/// ```no_run
/// use std::time::Instant;
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// use taskdeck::files::Workspace;
/// use taskdeck::mcp::create_mcp_service;
/// use taskdeck::store::MemoryTaskStore;
///
/// let ct = CancellationToken::new();
/// let service = create_mcp_service(
///     MemoryTaskStore::new(),
///     Workspace::new("."),
///     Instant::now(),
///     ct,
/// );
///
/// let app: Router = Router::new().nest_service("/mcp", service);
/// ```
pub fn create_mcp_service<S: TaskStore + 'static>(
    store: impl Into<Arc<S>>,
    workspace: Workspace,
    started_at: Instant,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<S>, LocalSessionManager> {
    let store = store.into();

    // Service factory: creates a new McpServer instance per session
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer<S>, std::io::Error> {
        let server = McpServer::new(Arc::clone(&store), workspace.clone(), started_at);
        Ok(server)
    };

    let mut config = StreamableHttpServerConfig::default();
    config.sse_keep_alive = None; // Use default (15s)
    config.sse_retry = None; // Use default retry behavior
    config.stateful_mode = true; // Enable session management
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
