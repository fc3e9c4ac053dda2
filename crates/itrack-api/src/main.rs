//! itrack-api server binary
//!
//! Reads the storage path and port from the environment, opens the JSONL
//! store, and serves the REST API.

use itrack_api::{app, AppState};
use itrack_core::{Config, JsonlStore};

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;

    let store = JsonlStore::open(&config.db_path)
        .map_err(|e| anyhow::anyhow!("Failed to open store at {}: {}", config.db_path.display(), e))?;
    tracing::info!("Using store at {}", store.path().display());

    let state = AppState::new(store);
    let router = app(state);

    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("Starting itrack-api on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
