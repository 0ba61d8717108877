//! Tavola REST API Server
//!
//! This binary starts the Tavola REST API server, exposing the restaurant
//! search endpoint together with health and diagnostic routes.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use tavola_client::GooglePlacesClient;
use tavola_server::{create_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let config = ServerConfig::parse();

    // Initialize the Places client; the server starts without it, but the
    // search endpoint reports a configuration error until a key is set.
    let places_client = match config.google_maps_api_key.as_deref() {
        Some(key) => Some(
            GooglePlacesClient::new(key, &config.places_base_url)
                .context("Failed to initialize Google Places client")?,
        ),
        None => {
            warn!("GOOGLE_MAPS_API_KEY is not set; restaurant search is disabled");
            None
        }
    };

    // Create application state
    let app_state = AppState::new(places_client, config.google_maps_api_key.clone());

    // Build router
    let app = create_router(app_state, &config);

    // Bind to address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid address")?;

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Starting Tavola API server on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
