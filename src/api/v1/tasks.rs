//! Task management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::store::{StoreError, Task, TaskPatch, TaskStore};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Success envelope wrapped around every v1 payload.
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true`; error payloads use [`ErrorResponse`]
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
    /// Human-readable outcome summary
    #[schema(example = "Task created successfully")]
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// Error response DTO
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    #[schema(example = false)]
    pub success: bool,
    /// Error message
    #[schema(example = "Task not found")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Task response DTO
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Unique identifier
    #[schema(example = "1")]
    pub id: String,
    /// Task title
    #[schema(example = "Setup API Server")]
    pub title: String,
    /// Task description
    #[schema(example = "Create HTTP API endpoints for task management")]
    pub description: String,
    /// Completion flag
    pub completed: bool,
    /// Creation timestamp (RFC 3339)
    #[schema(example = "2024-01-15T10:00:00Z")]
    pub created_at: String,
    /// Last update timestamp (RFC 3339)
    #[schema(example = "2024-01-15T10:00:00Z")]
    pub updated_at: String,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            completed: t.completed,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Create task request DTO
///
/// Both fields are deserialized as optional so a missing key reaches the
/// store's validation (HTTP 400) instead of a deserialization failure (422).
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    /// Task title
    #[schema(example = "Write release notes")]
    pub title: Option<String>,
    /// Task description
    #[schema(example = "Summarize the changes shipping this week")]
    pub description: Option<String>,
}

/// Update task request DTO (partial update)
///
/// Only keys present in the request are applied; explicit `""` and `false`
/// count as present.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    /// New title
    #[schema(example = "Updated title")]
    pub title: Option<String>,
    /// New description
    #[schema(example = "Updated description")]
    pub description: Option<String>,
    /// New completion flag
    #[schema(example = true)]
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    fn into_patch(self) -> TaskPatch {
        TaskPatch {
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all tasks
///
/// Returns every task in creation order.
#[utoipa::path(
    get,
    path = "/v1/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "All tasks in creation order", body = ApiResponse<Vec<TaskResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_tasks<S: TaskStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<ApiResponse<Vec<TaskResponse>>>, (StatusCode, Json<ErrorResponse>)> {
    let tasks = state.store().list().map_err(store_error_response)?;

    let items: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();
    let message = format!("Retrieved {} tasks", items.len());
    Ok(Json(ApiResponse::new(items, message)))
}

/// Get a single task by id
#[utoipa::path(
    get,
    path = "/v1/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task found", body = ApiResponse<TaskResponse>),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_task<S: TaskStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TaskResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let task = state.store().get(&id).map_err(store_error_response)?;

    Ok(Json(ApiResponse::new(
        TaskResponse::from(task),
        "Task retrieved successfully",
    )))
}

/// Create a task
#[utoipa::path(
    post,
    path = "/v1/tasks",
    tag = "tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = ApiResponse<TaskResponse>),
        (status = 400, description = "Missing title or description", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_task<S: TaskStore>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TaskResponse>>), (StatusCode, Json<ErrorResponse>)> {
    let title = req.title.unwrap_or_default();
    let description = req.description.unwrap_or_default();

    let task = state
        .store()
        .create(&title, &description)
        .map_err(store_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            TaskResponse::from(task),
            "Task created successfully",
        )),
    ))
}

/// Update a task
///
/// Applies only the fields present in the request body.
#[utoipa::path(
    put,
    path = "/v1/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task ID")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = ApiResponse<TaskResponse>),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_task<S: TaskStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<ApiResponse<TaskResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let task = state
        .store()
        .update(&id, req.into_patch())
        .map_err(store_error_response)?;

    Ok(Json(ApiResponse::new(
        TaskResponse::from(task),
        "Task updated successfully",
    )))
}

/// Delete a task
///
/// Returns the deleted task so clients can offer undo.
#[utoipa::path(
    delete,
    path = "/v1/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task deleted", body = ApiResponse<TaskResponse>),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_task<S: TaskStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TaskResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let task = state.store().delete(&id).map_err(store_error_response)?;

    Ok(Json(ApiResponse::new(
        TaskResponse::from(task),
        "Task deleted successfully",
    )))
}

// =============================================================================
// Helpers
// =============================================================================

pub(super) fn store_error_response(e: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        StoreError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Task not found")),
        ),
        StoreError::Validation { message } => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
        }
    }
}
