use anyhow::Context;
use clap::Parser;
use geoshm::api::{create_router, AppState};
use geoshm::{ServerConfig, SessionStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let state = AppState::new(SessionStore::new(config.max_sessions), config.max_upload_bytes);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    info!(address = %config.bind, "turbine location API listening");
    info!("  POST   /api/locations      (multipart/form-data: file)");
    info!("  GET    /api/locations      (x-session-id header)");
    info!("  DELETE /api/locations");
    info!("  GET    /api/locations.csv");
    info!("  GET    /api/map");
    info!("  GET    /api/sample");
    info!("  GET    /api/stats");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
