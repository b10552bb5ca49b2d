//! Tool catalog and invocation handlers.
//!
//! Exposes the same tools the MCP endpoint serves, over plain JSON. The
//! catalog is static; calls go through [`crate::mcp::ToolDispatcher`].

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::files::FilesError;
use crate::mcp::{ToolDescriptor, ToolError, tool_catalog};
use crate::store::{StoreError, TaskStore};

use super::{ApiResponse, ErrorResponse};

// =============================================================================
// DTOs
// =============================================================================

/// Tool descriptor DTO
#[derive(Serialize, ToSchema)]
pub struct ToolResponse {
    /// Tool name
    #[schema(example = "create_task")]
    pub name: String,
    /// What the tool does
    #[schema(example = "Create a new task")]
    pub description: String,
    /// JSON Schema for the tool's arguments
    #[schema(value_type = Object)]
    pub parameters: serde_json::Value,
}

impl From<ToolDescriptor> for ToolResponse {
    fn from(d: ToolDescriptor) -> Self {
        Self {
            name: d.name.to_string(),
            description: d.description.to_string(),
            parameters: d.parameters,
        }
    }
}

/// Tool call request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct ToolCallRequest {
    /// Name of the tool to invoke
    #[serde(rename = "toolName")]
    #[schema(example = "create_task")]
    pub tool_name: Option<String>,
    /// Tool arguments, shaped by the tool's parameter schema
    #[serde(default)]
    #[schema(value_type = Object)]
    pub parameters: serde_json::Value,
}

/// Tool call response envelope
#[derive(Serialize, ToSchema)]
pub struct ToolCallResponse {
    /// Always `true`; failures use [`ErrorResponse`]
    #[schema(example = true)]
    pub success: bool,
    /// Tool-specific result payload
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    #[schema(example = "Tool executed successfully")]
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// List available tools
///
/// Returns the static catalog with each tool's parameter schema.
#[utoipa::path(
    get,
    path = "/v1/tools",
    tag = "tools",
    responses(
        (status = 200, description = "Available tools", body = ApiResponse<Vec<ToolResponse>>)
    )
)]
#[instrument]
pub async fn list_tools() -> Json<ApiResponse<Vec<ToolResponse>>> {
    let items: Vec<ToolResponse> = tool_catalog().into_iter().map(ToolResponse::from).collect();
    let message = format!("Retrieved {} tools", items.len());
    Json(ApiResponse::new(items, message))
}

/// Invoke a tool by name
///
/// Runs the named tool against the same store and workspace the REST
/// endpoints use.
#[utoipa::path(
    post,
    path = "/v1/tools/call",
    tag = "tools",
    request_body = ToolCallRequest,
    responses(
        (status = 200, description = "Tool executed", body = ToolCallResponse),
        (status = 400, description = "Unknown tool or invalid parameters", body = ErrorResponse),
        (status = 404, description = "Tool target not found", body = ErrorResponse),
        (status = 500, description = "Tool execution failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn call_tool<S: TaskStore>(
    State(state): State<AppState<S>>,
    Json(req): Json<ToolCallRequest>,
) -> Result<Json<ToolCallResponse>, (StatusCode, Json<ErrorResponse>)> {
    let tool_name = req.tool_name.unwrap_or_default();
    if tool_name.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Tool name is required")),
        ));
    }

    let data = state
        .dispatcher()
        .dispatch(&tool_name, req.parameters)
        .map_err(tool_error_response)?;

    Ok(Json(ToolCallResponse {
        success: true,
        data,
        message: "Tool executed successfully".to_string(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

fn tool_error_response(e: ToolError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &e {
        ToolError::UnknownTool { .. } | ToolError::InvalidParams { .. } => StatusCode::BAD_REQUEST,
        ToolError::Store(StoreError::NotFound { .. })
        | ToolError::Files(FilesError::NotFound { .. }) => StatusCode::NOT_FOUND,
        ToolError::Store(StoreError::Validation { .. })
        | ToolError::Files(FilesError::InvalidPath { .. }) => StatusCode::BAD_REQUEST,
        ToolError::Files(FilesError::Io { .. }) | ToolError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::new(e.to_string())))
}
