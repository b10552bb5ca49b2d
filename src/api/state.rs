//! Application state for the API server.

use std::sync::Arc;
use std::time::Instant;

use crate::files::Workspace;
use crate::mcp::ToolDispatcher;
use crate::store::TaskStore;

/// Shared application state.
///
/// Holds the task store, the workspace the file endpoints expose, and the
/// data the status endpoint reports. Generic over `S: TaskStore` so handlers
/// stay agnostic of the concrete store (no dyn dispatch).
pub struct AppState<S: TaskStore> {
    store: Arc<S>,
    workspace: Workspace,
    port: u16,
    started_at: Instant,
}

// Manual Clone impl - we only need Arc to be cloneable, not S
impl<S: TaskStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            workspace: self.workspace.clone(),
            port: self.port,
            started_at: self.started_at,
        }
    }
}

impl<S: TaskStore> AppState<S> {
    /// Create a new AppState over the given store and workspace.
    ///
    /// `port` and `started_at` feed the status endpoint; `started_at` is
    /// shared with the MCP `system_info` tool so both report the same uptime.
    pub fn new(store: S, workspace: Workspace, port: u16, started_at: Instant) -> Self {
        Self {
            store: Arc::new(store),
            workspace,
            port,
            started_at,
        }
    }

    /// Get a reference to the task store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a cloned Arc to the task store.
    ///
    /// Useful for handing the store to the MCP service.
    pub fn store_arc(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Get a reference to the workspace.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Port the server was configured to listen on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Instant the server started.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Build a tool dispatcher over this state's store and workspace.
    pub fn dispatcher(&self) -> ToolDispatcher<S> {
        ToolDispatcher::new(self.store_arc(), self.workspace.clone(), self.started_at)
    }
}
