//! Bulk loader entry point.
//!
//! Uses the same layered configuration as the server (`loader` and
//! `database` sections).

use lookaside_config::{init_logging, ConfigLoader};
use lookaside_core::LookasideResult;
use lookaside_loader::BulkLoader;
use lookaside_repository::{create_pool, DatabasePoolInterface, MySqlUserRepository, UserWriter};
use std::sync::Arc;
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

    if let Err(e) = run(config).await {
        error!("Bulk load failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: lookaside_config::AppConfig) -> LookasideResult<()> {
    let db_pool = create_pool(&config.database).await?;
    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    }

    let writer: Arc<dyn UserWriter> = Arc::new(MySqlUserRepository::new(db_pool.clone()));
    let report = BulkLoader::new(Arc::clone(&writer), config.loader.clone())
        .run()
        .await?;

    info!(
        "Users phase took {:?}, total {:?}",
        report.users_elapsed, report.total_elapsed
    );
    info!(
        "Store now holds {} users and {} orders",
        writer.count_users().await?,
        writer.count_orders().await?
    );

    db_pool.close().await;
    Ok(())
}
