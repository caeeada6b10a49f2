//! ExoHabit API Server
//!
//! Run with: cargo run -p exohabit-web

use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use exohabit_common::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting ExoHabit API server...");

    let config = Config::load()?;

    // Create app state: load model and ranking assets once.
    let state = exohabit_web::state::AppState::from_config(&config);

    // Build router
    let app = exohabit_web::router::build_router(state);

    // PORT env var wins over config, for PaaS deployments.
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(config.server.port);

    let addr: SocketAddr = format!("{}:{port}", config.server.host).parse()?;
    info!("Server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
