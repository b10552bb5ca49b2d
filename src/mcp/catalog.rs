//! Static tool catalog for the HTTP tool surface.
//!
//! Served on `GET /api/v1/tools` and echoed (names only) in the status
//! payload. The MCP endpoint derives its schemas from the parameter structs
//! instead; this catalog is the fixed shape plain-HTTP clients see.

use serde::Serialize;
use serde_json::{Value, json};

/// A tool visible on the HTTP surface.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON schema for the tool's parameter object.
    pub parameters: Value,
}

/// The seven supported tools, in dispatch-table order.
pub fn tool_catalog() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: "list_tasks",
            description: "Get all tasks from the task manager",
            parameters: json!({
                "type": "object",
                "properties": {},
            }),
        },
        ToolDescriptor {
            name: "create_task",
            description: "Create a new task",
            parameters: json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string", "description": "Task title" },
                    "description": { "type": "string", "description": "Task description" },
                },
                "required": ["title", "description"],
            }),
        },
        ToolDescriptor {
            name: "update_task",
            description: "Update an existing task",
            parameters: json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Task ID" },
                    "title": { "type": "string", "description": "Task title" },
                    "description": { "type": "string", "description": "Task description" },
                    "completed": { "type": "boolean", "description": "Task completion status" },
                },
                "required": ["id"],
            }),
        },
        ToolDescriptor {
            name: "delete_task",
            description: "Delete a task",
            parameters: json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Task ID" },
                },
                "required": ["id"],
            }),
        },
        ToolDescriptor {
            name: "read_file",
            description: "Read contents of a file",
            parameters: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "File path to read" },
                },
                "required": ["path"],
            }),
        },
        ToolDescriptor {
            name: "list_files",
            description: "List files in the workspace",
            parameters: json!({
                "type": "object",
                "properties": {},
            }),
        },
        ToolDescriptor {
            name: "system_info",
            description: "Get system information",
            parameters: json!({
                "type": "object",
                "properties": {},
            }),
        },
    ]
}

/// Names of every supported tool, in catalog order.
pub fn tool_names() -> Vec<String> {
    tool_catalog().into_iter().map(|t| t.name.to_string()).collect()
}
