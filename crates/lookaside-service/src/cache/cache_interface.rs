//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use lookaside_core::LookasideResult;
use std::time::Duration;

/// Cache store client over string keys and JSON string values.
///
/// Backend failures surface as `LookasideError::CacheUnavailable`, never as
/// `Ok(None)`, so callers can tell an outage from a miss.
#[async_trait]
pub trait CacheInterface: Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    /// A stored value that is not a UTF-8 string is a `Serialization`
    /// error, not an outage.
    async fn get_raw(&self, key: &str) -> LookasideResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> LookasideResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> LookasideResult<bool>;

    /// Round-trips a no-op command to verify the backend is reachable.
    async fn ping(&self) -> LookasideResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}
