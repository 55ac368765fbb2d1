//! Pacific Quotation API - Server Binary
//!
//! Starts the HTTP API for the quotation back office.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin quotation-api
//!
//! # Run with environment variables
//! API_PORT=8000 API_DATABASE_URL=sqlite://pacific.db cargo run --bin quotation-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8000)
//! * `API_DATABASE_URL` - SQLite connection string (default: sqlite://pacific.db)
//! * `API_LOG_LEVEL` - Log level used when `RUST_LOG` is unset (default: info)
//! * `API_LOGO_PATH` - PNG printed in the quotation header (default: logo.png)
//! * `API_LEVY_AMOUNT` - Per-policy levy in KES (default: 400)
//! * `API_MAX_CONNECTIONS` - Pool size (default: 5)
//!
//! A `.env` file in the working directory is loaded first.

use std::net::SocketAddr;

use anyhow::Context;
use domain_quotation::Logo;
use infra_db::{Database, DatabaseConfig};
use interface_api::{config::ApiConfig, create_router, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()
        .context("invalid API_* configuration")?
        .validated()?;
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Pacific Quotation API Server"
    );

    let database = Database::open(
        DatabaseConfig::new(config.database_url.clone()).max_connections(config.max_connections),
    )
    .await
    .context("failed to open database")?;

    let logo = load_logo(config.logo_path.as_deref()).await;
    let state = AppState::new(database.clone(), config.clone(), logo);
    let app = create_router(state);

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Reads the header logo. A missing or unreadable file only drops the logo.
async fn load_logo(path: Option<&str>) -> Option<Logo> {
    let path = path?;
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            tracing::info!(%path, size = bytes.len(), "Loaded quotation logo");
            Some(Logo::from_png(bytes))
        }
        Err(e) => {
            tracing::warn!(%path, error = %e, "Logo not available, quotations will omit it");
            None
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
