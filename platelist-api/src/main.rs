//! Platelist API - Main entry point
//!
//! HTTP API service for the review catalog: reviews, taxonomies, curated
//! top-ten lists, and the bulk import/export pipeline, over a SQLite store.

use anyhow::{Context, Result};
use clap::Parser;
use platelist_api::{build_router, AppState};
use platelist_common::{config, db};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for platelist-api
#[derive(Parser, Debug)]
#[command(name = "platelist-api")]
#[command(about = "Review catalog API service for Platelist")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5730", env = "PLATELIST_PORT")]
    port: u16,

    /// Root folder holding the database
    #[arg(short, long, env = "PLATELIST_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting Platelist API v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let root_folder = config::resolve_root_folder(args.root_folder.as_deref());
    config::ensure_root_folder(&root_folder).context("Failed to create root folder")?;

    let db_path = config::database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    let pool = db::init_database(&db_path)
        .await
        .context("Failed to initialize database")?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("platelist-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
