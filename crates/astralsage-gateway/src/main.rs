//! AstralSage Gateway — astrology readings over HTTP.
//! Model-backed when an API key is configured, mock readings otherwise.

mod routes;

use astralsage_core::{AstralConfig, Gateway, ModelClient, Orchestrator};
use routes::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env first so GEMINI_API_KEY / OPENROUTER_API_KEY and ASTRAL__* are visible.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[astralsage-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("AstralSage gateway stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = AstralConfig::load()?;
    let client = ModelClient::from_config(&cfg);
    let state = Arc::new(AppState::new(Orchestrator::new(Gateway::new(client))));
    let app = routes::build_app(state, &cfg);

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("AstralSage API v{} listening on {}", astralsage_core::version(), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("ctrl-c handler failed: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
