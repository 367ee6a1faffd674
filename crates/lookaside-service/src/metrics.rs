//! Prometheus metrics for the lookup path.

use crate::dto::CacheStatus;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Metric names for the lookup path.
pub mod names {
    /// Lookups answered from the cache.
    pub const CACHE_HITS_TOTAL: &str = "lookaside_cache_hits_total";
    /// Cache reads that found nothing.
    pub const CACHE_MISSES_TOTAL: &str = "lookaside_cache_misses_total";
    /// Cache failures absorbed by the degrade policy.
    pub const CACHE_DEGRADED_TOTAL: &str = "lookaside_cache_degraded_total";
    /// Undecodable entries evicted.
    pub const CACHE_EVICTIONS_TOTAL: &str = "lookaside_cache_evictions_total";

    /// Completed lookups by status.
    pub const LOOKUPS_TOTAL: &str = "lookaside_lookups_total";
    /// Failed lookups by error code.
    pub const LOOKUP_ERRORS_TOTAL: &str = "lookaside_lookup_errors_total";
    /// Lookup duration in seconds.
    pub const LOOKUP_DURATION_SECONDS: &str = "lookaside_lookup_duration_seconds";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(names::CACHE_HITS_TOTAL, "Total number of cache hits");
    describe_counter!(names::CACHE_MISSES_TOTAL, "Total number of cache misses");
    describe_counter!(
        names::CACHE_DEGRADED_TOTAL,
        "Total number of cache failures served from the store instead"
    );
    describe_counter!(
        names::CACHE_EVICTIONS_TOTAL,
        "Total number of malformed cache entries evicted"
    );
    describe_counter!(names::LOOKUPS_TOTAL, "Total number of completed user lookups");
    describe_counter!(names::LOOKUP_ERRORS_TOTAL, "Total number of failed user lookups");
    describe_histogram!(
        names::LOOKUP_DURATION_SECONDS,
        "User lookup duration in seconds"
    );
}

/// Cache metrics recorder.
#[derive(Clone)]
pub struct CacheMetrics;

impl CacheMetrics {
    pub fn hit() {
        counter!(names::CACHE_HITS_TOTAL).increment(1);
    }

    pub fn miss() {
        counter!(names::CACHE_MISSES_TOTAL).increment(1);
    }

    /// Record a cache failure that was absorbed.
    pub fn degraded(operation: &'static str) {
        counter!(names::CACHE_DEGRADED_TOTAL, "operation" => operation).increment(1);
    }

    pub fn evicted() {
        counter!(names::CACHE_EVICTIONS_TOTAL).increment(1);
    }
}

/// Lookup metrics recorder.
#[derive(Clone)]
pub struct LookupMetrics;

impl LookupMetrics {
    /// Record a completed lookup.
    pub fn completed(path: &'static str, status: CacheStatus, duration: Duration) {
        counter!(
            names::LOOKUPS_TOTAL,
            "path" => path,
            "status" => status.as_str()
        )
        .increment(1);

        histogram!(
            names::LOOKUP_DURATION_SECONDS,
            "path" => path,
            "status" => status.as_str()
        )
        .record(duration.as_secs_f64());
    }

    /// Record a failed lookup.
    pub fn failed(path: &'static str, error_code: &'static str, duration: Duration) {
        counter!(
            names::LOOKUP_ERRORS_TOTAL,
            "path" => path,
            "code" => error_code
        )
        .increment(1);

        histogram!(
            names::LOOKUP_DURATION_SECONDS,
            "path" => path,
            "status" => "ERROR"
        )
        .record(duration.as_secs_f64());
    }
}
