//! taskdeck: a demonstration server pairing an HTTP CRUD API for a task
//! list with an MCP tool server exposing the same operations.
//!
//! A single in-memory task store is shared by every entry point: the REST
//! handlers under `/api/v1`, the HTTP tool-call endpoint, and the MCP
//! streamable-HTTP service at `/mcp`. A small embedded UI exercises all of
//! them from the browser.

pub mod api;
pub mod files;
pub mod mcp;
pub mod store;
pub mod system;
