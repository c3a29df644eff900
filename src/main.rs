//! Execution planner HTTP server.
//!
//! Usage: `execution-planner [CONFIG_FILE]`

use anyhow::Context;
use execution_planner::api::rest::{AppState, create_router};
use execution_planner::application::services::ExecutionPlanner;
use execution_planner::config::AppConfig;
use execution_planner::infrastructure::persistence::JsonExchangeRepository;
use execution_planner::logging::init_logging;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref()).context("loading configuration")?;

    init_logging(&config.logging).context("initialising logging")?;

    let repository = Arc::new(JsonExchangeRepository::new(
        config.exchanges.data_folder.clone(),
    ));
    let planner = Arc::new(ExecutionPlanner::new(repository, config.planner));

    let count = planner.exchange_count().await;
    if count < 0 {
        tracing::warn!(
            folder = %config.exchanges.data_folder.display(),
            "Exchange data folder is not readable; plan requests will fail until it is"
        );
    } else {
        tracing::info!(
            folder = %config.exchanges.data_folder.display(),
            exchanges = count,
            tie_break = %config.planner.tie_break,
            "Exchange data folder found"
        );
    }

    let router = create_router(Arc::new(AppState::new(planner)));
    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;

    tracing::info!(%address, "Execution planner listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("Execution planner stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
