//! HTTP server wiring: versioned JSON API, MCP endpoint, docs, and the
//! embedded browser UI.

mod routes;
mod state;
mod static_assets;
mod v1;

#[cfg(test)]
mod static_assets_test;

use std::net::IpAddr;
use std::time::Instant;

use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use state::AppState;

use crate::files::Workspace;
use crate::mcp::create_mcp_service;
use crate::store::TaskStore;

/// API server configuration
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".parse().unwrap(),
            port: 3000,
        }
    }
}

/// Errors surfaced while running the API server
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(code(taskdeck::api::bind))]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(taskdeck::api::io))]
    Io(#[from] std::io::Error),
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdeck=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server with the given configuration.
///
/// Serves the JSON API under `/api/v1`, the MCP endpoint under `/mcp`, the
/// OpenAPI docs under `/docs`, and the browser UI everywhere else. Both
/// surfaces share the one store and workspace.
pub async fn run<S: TaskStore + 'static>(
    config: Config,
    store: S,
    workspace: Workspace,
) -> Result<(), ApiError> {
    init_tracing();

    let started_at = Instant::now();
    let state = AppState::new(store, workspace.clone(), config.port, started_at);

    let ct = CancellationToken::new();
    let mcp_service = create_mcp_service(state.store_arc(), workspace, started_at, ct.clone());

    let app = routes::create_router(state)
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("API server listening on http://{}", addr);
    info!("MCP endpoint available at http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ct))
        .await?;
    Ok(())
}

/// Resolve when the process receives Ctrl-C, cancelling in-flight MCP
/// sessions first.
async fn shutdown_signal(ct: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
    ct.cancel();
}
