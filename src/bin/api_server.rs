// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the growth assessor
// Usage: cargo run --features api --bin api_server

use anyhow::Context;
use growth_scorer_rust::{create_router, AppState, AssessorConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "growth_scorer_rust=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let config = AssessorConfig::from_env().context("Invalid assessor configuration")?;

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  LMS_REFERENCE_PATH: {:?}", config.reference_path);
    tracing::info!("  ZSCORE_METHOD: {:?}", config.z_score_method);
    tracing::info!("  PORT: {}", port);

    let state = AppState::new(&config).context("Failed to initialize growth assessor")?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
