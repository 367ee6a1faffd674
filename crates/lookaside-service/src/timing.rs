//! Wall-clock timing around a [`UserLookup`].

use crate::dto::UserLookupResponse;
use crate::metrics::LookupMetrics;
use crate::user_service::UserLookup;
use lookaside_core::{LookasideResult, UserId};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Times each lookup from entry to return and turns the outcome into the
/// response body.
#[derive(Clone)]
pub struct TimedUserLookup {
    inner: Arc<dyn UserLookup>,
    path: &'static str,
}

impl TimedUserLookup {
    /// `path` labels the metrics emitted for this lookup (e.g. `"cache"`).
    pub fn new(inner: Arc<dyn UserLookup>, path: &'static str) -> Self {
        Self { inner, path }
    }

    pub async fn get_user(&self, id: UserId) -> LookasideResult<UserLookupResponse> {
        let started = Instant::now();
        let result = self.inner.get_user(id).await;
        let elapsed = started.elapsed();

        match result {
            Ok(outcome) => {
                LookupMetrics::completed(self.path, outcome.status, elapsed);
                debug!(
                    "{} lookup of user {} took {:?} ({})",
                    self.path, id, elapsed, outcome.status
                );
                Ok(UserLookupResponse {
                    user: outcome.user,
                    processing_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                    cache_status: outcome.status,
                })
            }
            Err(err) => {
                LookupMetrics::failed(self.path, err.error_code(), elapsed);
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for TimedUserLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedUserLookup")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
