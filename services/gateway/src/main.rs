mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use anyhow::Context;
use config::GatewayConfig;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = GatewayConfig::load().context("failed to load gateway configuration")?;

    // RUST_LOG takes precedence over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        completion = ?config.quiz.completion,
        keys = ?config.quiz.keys,
        "Starting risk quiz gateway"
    );

    // Static tables are validated once here and never mutated afterwards
    let state = AppState::standard(config.quiz).context("invalid built-in quiz tables")?;

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
