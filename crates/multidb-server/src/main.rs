//! Main entry point for the multidb server.
//!
//! Loads configuration, eagerly connects every storage backend into the
//! registry, then serves the HTTP endpoints until shutdown.

use std::sync::Arc;
use std::time::Duration;

use multidb_persistence::BackendRegistry;
use multidb_server::{
    model::{app_state::AppState, config::Configuration},
    startup::{self, GracefulShutdown},
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new();
    let _logging_guard = startup::init_logging(&configuration.logging_config())?;

    // Backend construction is eager: a backend that cannot be reached here
    // fails the whole startup instead of the first request that hits it.
    let backend_configs = configuration.backend_configs()?;
    info!("connecting {} storage backends", backend_configs.len());
    let registry = Arc::new(BackendRegistry::connect(&backend_configs).await?);
    for handle in registry.iter() {
        info!(
            backend = %handle.name,
            kind = %handle.store.kind(),
            "backend connected"
        );
    }

    let address = configuration.server_address();
    let port = configuration.server_port();
    let app_state = Arc::new(AppState {
        configuration,
        registry,
    });

    let shutdown_signal = startup::wait_for_shutdown_signal().await;
    let graceful_shutdown = GracefulShutdown::new(shutdown_signal, Duration::from_secs(30));

    info!("Starting multidb server on {}:{}", address, port);
    let server = startup::server(app_state, address, port)?;

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = graceful_shutdown.wait_for_shutdown() => {
            info!("Server shutting down gracefully");
        }
    }

    info!("multidb server shutdown complete");
    Ok(())
}
