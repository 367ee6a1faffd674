//! # Lookaside Server
//!
//! Serves `GET /cache/{id}` and `GET /db/{id}` over one MySQL pool and one
//! Redis pool.

use lookaside_config::{init_logging, AppConfig, ConfigLoader};
use lookaside_core::{LookasideError, LookasideResult};
use lookaside_repository::{create_pool, DatabasePoolInterface};
use lookaside_server::{
    startup::print_startup_info,
    telemetry::install_metrics_recorder,
    wiring::{build_router, build_state},
};
use lookaside_service::{metrics::register_metrics, CacheInterface, RedisCacheService};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.into_config(),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);

    info!("Starting Lookaside Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> LookasideResult<()> {
    let metrics = if config.observability.metrics_enabled {
        let handle = install_metrics_recorder()?;
        register_metrics();
        Some(handle)
    } else {
        None
    };

    let db_pool = create_pool(&config.database).await?;
    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    }

    let cache: Arc<dyn CacheInterface> = Arc::new(RedisCacheService::from_config(&config.redis)?);

    let state = build_state(&config, db_pool.clone(), cache);
    let router = build_router(&config, state, metrics);

    let rest_addr = config.server.rest_addr();
    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| LookasideError::Internal(format!("Failed to bind REST: {}", e)))?;

    print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| LookasideError::Internal(format!("REST server error: {}", e)))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
