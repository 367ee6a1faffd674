//! Server startup utilities.

use lookaside_config::AppConfig;
use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let addr = config.server.rest_addr();
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Cache lookup:  http://{}/cache/{{id}}", addr);
    info!("Direct lookup: http://{}/db/{{id}}", addr);
    info!("Health:        http://{}/health", addr);
    info!("API Docs:      http://{}/swagger-ui", addr);
    if config.observability.metrics_enabled {
        info!("Metrics:       http://{}{}", addr, config.observability.metrics_path);
    }
    info!(
        "Cache: {} (ttl {}s, policy {:?})",
        if config.redis.enabled { "redis" } else { "disabled" },
        config.redis.ttl_secs,
        config.redis.failure_policy
    );
    info!("{}", separator);
}
