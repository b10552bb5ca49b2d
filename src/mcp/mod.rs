//! Model Context Protocol (MCP) server implementation
//!
//! This module provides an MCP server using the Streamable HTTP transport,
//! plus the tool plumbing shared with the plain HTTP surface.
//!
//! # Architecture
//!
//! - `server`: MCP server coordinator (`ServerHandler` impl)
//! - `service`: streamable-HTTP tower service wiring
//! - `tools`: one tool handler per domain (tasks, files, system)
//! - `dispatch`: the tool-call table behind `POST /api/v1/tools/call`
//! - `catalog`: the static tool listing for `GET /api/v1/tools`
//!
//! Both entry points run against the same store instance; the MCP tools
//! and the dispatcher share their parameter structs, so a tool accepts the
//! same arguments no matter which surface invokes it.

mod catalog;
mod dispatch;
pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod server_test;
#[cfg(test)]
mod service_test;

pub use catalog::{ToolDescriptor, tool_catalog, tool_names};
pub use dispatch::{ToolDispatcher, ToolError};
pub use server::McpServer;
pub use service::create_mcp_service;
