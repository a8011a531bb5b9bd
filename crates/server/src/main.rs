//! # nostradamus-server
//!
//! Binary entry point: loads configuration, installs tracing and serves the
//! API router.

use prediction_facade::{PredictionService, ServiceConfig};
use server::{app, AppState};
use std::env;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,prediction_api=info,tower_http=info".into()),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let service = PredictionService::new(config)?;
    let base_path = service.config().base_path.clone();
    let state = AppState::new(service);

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid number: {}", e))?;
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| format!("Invalid HOST:PORT configuration: {}", e))?;

    tracing::info!(
        "nostradamus-server v{} listening on {} (api at {})",
        env!("CARGO_PKG_VERSION"),
        addr,
        base_path
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
