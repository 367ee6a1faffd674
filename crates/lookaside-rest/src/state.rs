//! Application state for Axum handlers.

use lookaside_config::CacheFailurePolicy;
use lookaside_repository::DatabasePoolInterface;
use lookaside_service::{CacheInterface, TimedUserLookup};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Lookup behind `GET /cache/{id}`.
    pub cache_lookup: TimedUserLookup,
    /// Lookup behind `GET /db/{id}`.
    pub db_lookup: TimedUserLookup,
    pub cache: Arc<dyn CacheInterface>,
    pub cache_policy: CacheFailurePolicy,
    pub db_pool: Option<Arc<dyn DatabasePoolInterface>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        cache_lookup: TimedUserLookup,
        db_lookup: TimedUserLookup,
        cache: Arc<dyn CacheInterface>,
        cache_policy: CacheFailurePolicy,
    ) -> Self {
        Self {
            cache_lookup,
            db_lookup,
            cache,
            cache_policy,
            db_pool: None,
        }
    }

    /// Adds the pool checked by the readiness check.
    #[must_use]
    pub fn with_database(mut self, pool: Arc<dyn DatabasePoolInterface>) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
