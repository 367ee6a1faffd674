//! Metrics initialization.

use lookaside_core::{LookasideError, LookasideResult};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Installs the Prometheus recorder and returns the handle that renders
/// the scrape output.
pub fn install_metrics_recorder() -> LookasideResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| LookasideError::Configuration(format!("Failed to install metrics recorder: {}", e)))
}
