//! Tests for MCP server initialization

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tempfile::TempDir;

use crate::files::Workspace;
use crate::mcp::server::McpServer;
use crate::mcp::tool_names;
use crate::mcp::tools::{FileTools, SystemTools, TaskTools};
use crate::store::MemoryTaskStore;

fn server_fixture() -> (TempDir, McpServer<MemoryTaskStore>) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryTaskStore::with_sample_tasks());
    let server = McpServer::new(store, Workspace::new(dir.path()), Instant::now());
    (dir, server)
}

#[tokio::test]
async fn creates_server_over_a_shared_store() {
    let (_dir, server) = server_fixture();

    // Handlers are cloned per session, so the server itself must be Clone.
    let _clone = server.clone();
}

#[tokio::test]
async fn server_info_advertises_tool_support() {
    use rmcp::ServerHandler;

    let (_dir, server) = server_fixture();

    let info = server.get_info();

    assert!(info.capabilities.tools.is_some(), "Server should support tools");
    assert!(
        info.instructions.is_some(),
        "Server should provide instructions"
    );
    assert_eq!(info.server_info.name, "taskdeck-mcp");
}

#[tokio::test]
async fn registered_tools_cover_the_catalog() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryTaskStore::new());

    let mut registered = HashSet::new();
    for tool in TaskTools::new(store).router().list_all() {
        registered.insert(tool.name.to_string());
    }
    for tool in FileTools::new(Workspace::new(dir.path())).router().list_all() {
        registered.insert(tool.name.to_string());
    }
    for tool in SystemTools::new(Instant::now()).router().list_all() {
        registered.insert(tool.name.to_string());
    }

    let advertised: HashSet<String> = tool_names().into_iter().collect();
    assert_eq!(registered, advertised);
    assert_eq!(registered.len(), 7);
}
