mod calculators;
mod config;
mod content;
mod errors;
mod layout;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::catalog::load_catalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Exchange API v{}", env!("CARGO_PKG_VERSION"));

    // Load site content
    let catalog = load_catalog(config.content_file.as_deref())?;
    info!(
        "Catalog loaded: {} services, {} locations, {} property types",
        catalog.services.len(),
        catalog.locations.len(),
        catalog.property_types.len()
    );

    // Layout tables are built once here and read-only afterwards
    let state = AppState::new(catalog).context("Failed to build layout tables")?;

    let mut app = build_router(state).layer(TraceLayer::new_for_http());
    if config.cors_allow_any {
        app = app.layer(CorsLayer::permissive());
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
