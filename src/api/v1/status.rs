//! System health and status handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::mcp::tool_names;
use crate::store::TaskStore;
use crate::system;

use super::ApiResponse;

// =============================================================================
// DTOs
// =============================================================================

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "ok")]
    pub status: String,
}

/// Aggregated server status
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatusResponse {
    pub http_api: HttpApiStatus,
    pub mcp_server: McpServerStatus,
    pub system: SystemStatus,
}

/// HTTP API portion of the status report
#[derive(Serialize, ToSchema)]
pub struct HttpApiStatus {
    #[schema(example = "running")]
    pub status: String,
    /// Configured listen port
    #[schema(example = 3000)]
    pub port: u16,
    /// Milliseconds since the server started
    pub uptime: u64,
}

/// MCP portion of the status report
#[derive(Serialize, ToSchema)]
pub struct McpServerStatus {
    #[schema(example = "running")]
    pub status: String,
    /// Active sessions; sessions are not tracked, so this is always 0
    pub connections: u32,
    /// Names of the exposed tools
    pub tools: Vec<String>,
}

/// Host process portion of the status report
#[derive(Serialize, ToSchema)]
pub struct SystemStatus {
    pub memory: MemoryStatus,
    pub cpu: CpuStatus,
}

/// Process memory usage in bytes
#[derive(Serialize, ToSchema)]
pub struct MemoryStatus {
    pub used: u64,
    pub total: u64,
}

/// CPU usage sampled at request time
#[derive(Serialize, ToSchema)]
pub struct CpuStatus {
    /// Percentage across all cores
    pub usage: f32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
///
/// Returns the current health status of the API
#[utoipa::path(
    get,
    path = "/v1/health",
    tag = "system",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Server status endpoint
///
/// Reports the HTTP API, the MCP server, and host process resource usage in
/// one payload for the status panel.
#[utoipa::path(
    get,
    path = "/v1/status",
    tag = "system",
    responses(
        (status = 200, description = "Aggregated server status", body = ApiResponse<ServerStatusResponse>)
    )
)]
#[instrument(skip(state))]
pub async fn server_status<S: TaskStore>(
    State(state): State<AppState<S>>,
) -> Json<ApiResponse<ServerStatusResponse>> {
    let memory = system::memory();

    let status = ServerStatusResponse {
        http_api: HttpApiStatus {
            status: "running".to_string(),
            port: state.port(),
            uptime: state.started_at().elapsed().as_millis() as u64,
        },
        mcp_server: McpServerStatus {
            status: "running".to_string(),
            connections: 0,
            tools: tool_names(),
        },
        system: SystemStatus {
            memory: MemoryStatus {
                used: memory.used,
                total: memory.total,
            },
            cpu: CpuStatus {
                usage: system::cpu_usage(),
            },
        },
    };

    Json(ApiResponse::new(
        status,
        "Server status retrieved successfully",
    ))
}
