//! HomeMetrics Server: application entry point.

use std::process::ExitCode;

use homemetrics_server::{App, ServerConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str =
    "homemetrics_server=info,homemetrics_store=info,homemetrics_auth=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .json()
        .init();

    info!("Starting HomeMetrics server...");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let app = App::new(config);
    let stats = app.graph.stats().await;
    info!(
        roles = stats.roles,
        "Core ready; state is held in memory and lost on restart"
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return ExitCode::FAILURE;
    }

    let stats = app.graph.stats().await;
    info!(
        users = stats.users,
        rooms = stats.rooms,
        metrics = stats.metrics,
        readings = stats.readings,
        "HomeMetrics server stopped; in-memory state discarded"
    );
    ExitCode::SUCCESS
}
