//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::state::AppState;
use super::static_assets;
use super::v1;
use crate::store::TaskStore;

/// Build routes with generic store type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the TaskStore trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($S:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$S>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TaskDeck API",
        version = "0.1.0",
        description = "Task manager demo pairing a JSON API with an MCP tool server",
        license(name = "GPL-2.0")
    ),
    paths(
        v1::health,
        v1::server_status,
        v1::list_tasks,
        v1::get_task,
        v1::create_task,
        v1::update_task,
        v1::delete_task,
        v1::list_files,
        v1::read_file,
        v1::list_tools,
        v1::call_tool,
    ),
    components(
        schemas(
            v1::HealthResponse,
            v1::ServerStatusResponse,
            v1::TaskResponse,
            v1::CreateTaskRequest,
            v1::UpdateTaskRequest,
            v1::FileEntryResponse,
            v1::FileContentResponse,
            v1::ReadFileRequest,
            v1::ToolResponse,
            v1::ToolCallRequest,
            v1::ToolCallResponse,
            v1::ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "Health and status endpoints"),
        (name = "tasks", description = "Task management endpoints"),
        (name = "files", description = "Workspace file endpoints"),
        (name = "tools", description = "Tool catalog and invocation endpoints")
    )
)]
pub struct ApiDoc;

/// Create the application router: versioned API, OpenAPI docs, and the
/// embedded frontend fallback.
pub fn create_router<S: TaskStore + 'static>(state: AppState<S>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic handlers)
    let system_routes = Router::new()
        .route("/health", get(v1::health))
        .route("/tools", get(v1::list_tools));

    // Status route (generic over the store)
    let status_routes = routes!(S => {
        get "/status" => v1::server_status,
    });

    // Task routes (generic over the store)
    let task_routes = routes!(S => {
        get "/tasks" => v1::list_tasks,
        post "/tasks" => v1::create_task,
        get "/tasks/{id}" => v1::get_task,
        put "/tasks/{id}" => v1::update_task,
        delete "/tasks/{id}" => v1::delete_task,
    });

    // Workspace file routes
    let file_routes = routes!(S => {
        get "/files" => v1::list_files,
        post "/files/read" => v1::read_file,
    });

    // Tool invocation route
    let tool_routes = routes!(S => {
        post "/tools/call" => v1::call_tool,
    });

    let api_routes = system_routes
        .merge(status_routes)
        .merge(task_routes)
        .merge(file_routes)
        .merge(tool_routes)
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .merge(Scalar::with_url("/docs", api))
        .fallback(static_assets::serve_frontend)
}
