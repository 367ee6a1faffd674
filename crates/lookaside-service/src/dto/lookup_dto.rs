//! Lookup response DTOs.

use super::CachedUserView;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Where a lookup was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CacheStatus {
    /// Served from the cache.
    RedisHit,
    /// Cache read missed (or was skipped); served from the store.
    RedisMiss,
    /// Cache bypassed on purpose.
    RdbDirect,
}

impl CacheStatus {
    /// Wire name, also used as a metrics label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RedisHit => "REDIS_HIT",
            Self::RedisMiss => "REDIS_MISS",
            Self::RdbDirect => "RDB_DIRECT",
        }
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body of `GET /cache/{id}` and `GET /db/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserLookupResponse {
    pub user: CachedUserView,
    /// Wall-clock time spent inside the lookup, in milliseconds.
    #[schema(example = 3)]
    pub processing_time_ms: u64,
    pub cache_status: CacheStatus,
}
