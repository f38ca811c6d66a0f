//! Smart Irrigation Prediction Server
//!
//! Startup sequence: initialize tracing, load configuration from the
//! environment, attempt the one-time model artifact load (best effort), then
//! serve the router. A failed model load is logged and degrades the service
//! to health checks; it never prevents startup.

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use irrigation_engine::model::load_model;
use irrigation_engine::PredictHandler;
use irrigation_server::app::{router, AppState};
use irrigation_server::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "irrigation_server={level},irrigation_engine={level},tower_http={level}",
                    level = config.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!(
        service = "irrigation-server",
        version = env!("CARGO_PKG_VERSION"),
        port = config.port,
        model_path = %config.model_path.display(),
        "Starting Smart Irrigation prediction server"
    );

    // One-time model load; None leaves the service in health-check-only mode.
    let model = load_model(&config.model_path);
    info!(model_loaded = model.is_some(), "Model status resolved");

    let state = AppState::new(PredictHandler::new(model), config.index_path.clone());
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
