//! Calculator Server binary.

use anyhow::Context;
use calc_server::{AppConfig, AppState, init_logging, metrics::init_metrics, run_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Guards must outlive the server so file sinks keep flushing
    let log_guards = init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::info!(
        "Starting Calculator Server v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!(service = %config.logging.service, "Service name");
    if log_guards.has_file_sinks() {
        tracing::info!("Log directory: {}", config.logging.dir.display());
    }

    let addr = config.server.socket_addr()?;

    let mut state = AppState::from_config(&config);
    if config.metrics.enabled {
        let handle = init_metrics().context("Failed to initialize metrics")?;
        state = state.with_metrics(handle);
    }

    run_server(addr, state).await?;

    tracing::info!("Server stopped");
    drop(log_guards);
    Ok(())
}
