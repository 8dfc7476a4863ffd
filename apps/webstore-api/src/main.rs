use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{error, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // One attempt only: an unreachable store at boot ends the process
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb)
        .await
        .inspect_err(|e| {
            error!(
                url = %config.mongodb.redacted_url(),
                error = %e,
                "Error connecting to MongoDB"
            );
        })?;

    let db = mongo_client.database(config.mongodb.database());
    info!(database = config.mongodb.database(), "Connected to MongoDB");

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let app = api::app(&state);

    info!(
        images = %state.config.images_dir().display(),
        "Starting webstore API with graceful shutdown (30s timeout)"
    );

    let client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Webstore API shutdown complete");
    Ok(())
}
