//! TaskDeck server binary.
//!
//! Builds the in-memory store and the workspace and hands them to the API
//! server. The API layer stays agnostic of the concrete store.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use taskdeck::api::{self, ApiError, Config};
use taskdeck::files::{FilesError, Workspace};
use taskdeck::store::MemoryTaskStore;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Workspace error: {0}")]
    #[diagnostic(code(taskdeck::binary::workspace))]
    Workspace(#[from] FilesError),

    #[error("API server error: {0}")]
    #[diagnostic(code(taskdeck::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(author, version, about = "Task manager demo with HTTP API and MCP server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Directory exposed through the file tools (defaults to TASKDECK_WORKSPACE
    /// or the current directory)
    #[arg(long)]
    workspace: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    let workspace = match cli.workspace {
        Some(dir) => Workspace::new(dir),
        None => Workspace::from_env()?,
    };
    println!("Serving workspace files from {:?}", workspace.root());

    // Demo data so every surface has something to show on first start
    let store = MemoryTaskStore::with_sample_tasks();

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        store,
        workspace,
    )
    .await?;

    Ok(())
}
