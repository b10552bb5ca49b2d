//! Workspace file handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::files::{FileContent, FileEntry, FileKind, FilesError};
use crate::store::TaskStore;

use super::{ApiResponse, ErrorResponse};

// =============================================================================
// DTOs
// =============================================================================

/// Directory entry DTO
#[derive(Serialize, ToSchema)]
pub struct FileEntryResponse {
    /// Entry name
    #[schema(example = "README.md")]
    pub name: String,
    /// Path relative to the workspace root
    #[schema(example = "README.md")]
    pub path: String,
    /// Entry kind
    #[serde(rename = "type")]
    #[schema(example = "file")]
    pub kind: String,
    /// Size in bytes, present for files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Last modification time (RFC 3339), if the platform reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2024-01-15T10:00:00Z")]
    pub modified: Option<String>,
}

impl From<FileEntry> for FileEntryResponse {
    fn from(e: FileEntry) -> Self {
        Self {
            name: e.name,
            path: e.path,
            kind: match e.kind {
                FileKind::File => "file",
                FileKind::Directory => "directory",
            }
            .to_string(),
            size: e.size,
            modified: e.modified,
        }
    }
}

/// File content DTO
#[derive(Serialize, ToSchema)]
pub struct FileContentResponse {
    /// UTF-8 file contents
    pub content: String,
    /// Path relative to the workspace root
    #[schema(example = "README.md")]
    pub path: String,
    /// Content length in bytes
    pub size: u64,
}

impl From<FileContent> for FileContentResponse {
    fn from(c: FileContent) -> Self {
        Self {
            content: c.content,
            path: c.path,
            size: c.size,
        }
    }
}

/// Read file request DTO
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReadFileRequest {
    /// Workspace-relative file path
    #[schema(example = "README.md")]
    pub path: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// List workspace files
///
/// Non-recursive listing of the workspace root; build and VCS directories
/// are excluded.
#[utoipa::path(
    get,
    path = "/v1/files",
    tag = "files",
    responses(
        (status = 200, description = "Workspace entries sorted by name", body = ApiResponse<Vec<FileEntryResponse>>),
        (status = 500, description = "Workspace root could not be read", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_files<S: TaskStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<ApiResponse<Vec<FileEntryResponse>>>, (StatusCode, Json<ErrorResponse>)> {
    let entries = state.workspace().list().map_err(files_error_response)?;

    let items: Vec<FileEntryResponse> =
        entries.into_iter().map(FileEntryResponse::from).collect();
    let message = format!("Listed {} files and directories", items.len());
    Ok(Json(ApiResponse::new(items, message)))
}

/// Read a workspace file
///
/// Accepts a path relative to the workspace root. Absolute paths and paths
/// escaping the root are rejected.
#[utoipa::path(
    post,
    path = "/v1/files/read",
    tag = "files",
    request_body = ReadFileRequest,
    responses(
        (status = 200, description = "File contents", body = ApiResponse<FileContentResponse>),
        (status = 400, description = "Missing or invalid path", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn read_file<S: TaskStore>(
    State(state): State<AppState<S>>,
    Json(req): Json<ReadFileRequest>,
) -> Result<Json<ApiResponse<FileContentResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let path = req.path.unwrap_or_default();
    if path.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("File path is required")),
        ));
    }

    let content = state.workspace().read(&path).map_err(files_error_response)?;

    Ok(Json(ApiResponse::new(
        FileContentResponse::from(content),
        "File read successfully",
    )))
}

// =============================================================================
// Helpers
// =============================================================================

pub(super) fn files_error_response(e: FilesError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        FilesError::InvalidPath { .. } => StatusCode::BAD_REQUEST,
        FilesError::NotFound { .. } => StatusCode::NOT_FOUND,
        FilesError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::new(e.to_string())))
}
