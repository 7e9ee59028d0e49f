mod event;
mod handler;
mod processor;

use axum::Router;
use axum::routing::{get, post};
use crop_core::{CropConfig, StorageHttpClient};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub storage: StorageHttpClient,
    pub config: CropConfig,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let storage = match StorageHttpClient::from_env() {
        Ok(client) => client,
        Err(message) => {
            tracing::error!(error = %message, "failed to initialize storage client");
            std::process::exit(1);
        }
    };

    let config = match CropConfig::from_env() {
        Ok(config) => config,
        Err(message) => {
            tracing::error!(error = %message, "invalid crop configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        container = %config.container,
        input_prefix = %config.input_prefix,
        output_prefix = %config.output_prefix,
        target_side = config.target_side,
        "crop configuration loaded"
    );

    let state = AppState { storage, config };

    let app = Router::new()
        .route("/health", get(handler::health))
        .route("/events", post(handler::notifications))
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{port}");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %addr, "crop processor listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
