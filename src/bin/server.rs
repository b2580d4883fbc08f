//! Raidwatch HTTP Server Binary
//!
//! This is the main entry point for the raidwatch REST API server. It loads
//! the attacks CSV, computes every dashboard view synchronously, and only
//! then starts serving requests — a load failure aborts startup, since
//! there is nothing useful to serve with partial data.
//!
//! # Usage
//!
//! ```bash
//! DATA_PATH=missiles_attacks_cleaned.csv cargo run --bin raidwatch-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATA_PATH`: Attacks CSV path (default: missiles_attacks_cleaned.csv)
//! - `OVERRIDES_PATH`: Optional TOML coordinate-override table
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use raidwatch::config::ServerConfig;
use raidwatch::http::{create_router, AppState};
use raidwatch::parsing::{load_attacks, CoordinateOverrides};
use raidwatch::services::DashboardViews;

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

    info!("Starting raidwatch HTTP server");

    let config = ServerConfig::from_env();

    let overrides = match &config.overrides_path {
        Some(path) => CoordinateOverrides::from_file(path)?,
        None => CoordinateOverrides::default(),
    };
    info!(sites = overrides.len(), "coordinate override table ready");

    // Load and aggregate before becoming interactive; any load error is fatal.
    let events = load_attacks(&config.data_path, &overrides)?;
    let views = DashboardViews::build(events);
    info!(
        events = views.overview.total_events,
        days = views.daily.len(),
        categories = views.overview.category_totals.len(),
        "dashboard views computed"
    );

    let state = AppState::new(Arc::new(views));
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
