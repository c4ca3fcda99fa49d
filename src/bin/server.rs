//! Satellite tracking HTTP server binary.
//!
//! Initializes logging and the in-memory repository, starts the periodic TLE
//! refresh job, and serves the REST API.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CATALOG_URL`: Upstream TLE catalog base URL (default: https://api.r4uab.ru)
//! - `TLE_REFRESH_HOURS`: Hours between TLE refresh passes (default: 24)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sattrack::clients::CatalogClient;
use sattrack::config::Config;
use sattrack::db::{FullRepository, LocalRepository};
use sattrack::http::{create_router, AppState};
use sattrack::jobs::TleRefreshJob;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting satellite tracking server");

    let config = Config::from_env()?;

    let repository: Arc<dyn FullRepository> = Arc::new(LocalRepository::new());
    let catalog = Arc::new(CatalogClient::new(config.catalog_url.clone())?);

    // Background TLE refresh keeps stored element sets current.
    tokio::spawn(
        TleRefreshJob::new(
            Arc::clone(&repository),
            Arc::clone(&catalog),
            config.tle_refresh_interval,
        )
        .run(),
    );
    info!(
        interval_secs = config.tle_refresh_interval.as_secs(),
        "TLE refresh job scheduled"
    );

    let state = AppState::new(repository, catalog);
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
