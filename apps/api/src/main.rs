mod advisor;
mod ai;
mod catalog;
mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod profile;
mod readiness;
mod roadmap;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai::build_backend;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::snapshot::SnapshotFile;
use crate::store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting LaunchPad API v{}", env!("CARGO_PKG_VERSION"));

    // Role catalog
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    info!("Role catalog loaded: {} roles", catalog.len());

    // Persisted state, if configured
    let snapshot = config.state_path.clone().map(SnapshotFile::new);
    let store = match &snapshot {
        Some(file) => file.load().await?,
        None => {
            info!("STATE_PATH not set, state is in-memory only");
            Store::default()
        }
    };

    // AI backend (live or deterministic, per AI_MODE)
    let ai = build_backend(&config)?;

    let state = AppState::new(config.clone(), catalog, store, ai, snapshot);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
