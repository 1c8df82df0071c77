//! # Hot Coffee
//!
//! REST server for coffee shop management.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cli::parse() ──► ApiConfig::load() ──► init_tracing()                  │
//! │                                              │                          │
//! │                                              ▼                          │
//! │  DataStore::open(data_dir) ──► AppState ──► build_router()              │
//! │                                              │                          │
//! │                                              ▼                          │
//! │  axum::serve(listener) ◄── graceful shutdown on Ctrl+C / SIGTERM        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use clap::Parser;
use coffee_api::logging::init_tracing;
use coffee_api::{build_router, ApiConfig, AppState, Cli};
use coffee_store::{DataStore, StoreConfig};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = ApiConfig::load(&cli)?;
    init_tracing(&config)?;

    info!("Starting Hot Coffee server...");
    info!(
        port = config.port,
        data_dir = %config.data_dir.display(),
        log_format = %config.log_format,
        "Configuration loaded"
    );

    // Open the data directory
    let store = DataStore::open(StoreConfig::new(&config.data_dir)).await?;

    // Create shared state
    let state = Arc::new(AppState::new(store));
    let app = build_router(state);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
