//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::redis::{AsyncCommands, ErrorKind, RedisError};
use deadpool_redis::{Config, Pool, Runtime};
use lookaside_config::RedisConfig;
use lookaside_core::{LookasideError, LookasideResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Default TTL for cached user views (60 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Creates a Redis connection pool.
///
/// No connection is opened here; an unreachable server shows up on the
/// first command so that a degrading service can still start.
pub fn create_redis_pool(config: &RedisConfig) -> LookasideResult<Pool> {
    info!("Creating Redis connection pool...");

    let timeout = Some(config.timeout());
    let pool = Config::from_url(&config.url)
        .builder()
        .map_err(|e| LookasideError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(config.pool_size)
        .runtime(Runtime::Tokio1)
        .wait_timeout(timeout)
        .create_timeout(timeout)
        .recycle_timeout(timeout)
        .build()
        .map_err(|e| LookasideError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

    Ok(pool)
}

/// Redis-based cache service.
pub struct RedisCacheService {
    /// Redis connection pool; `None` when caching is disabled.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache service (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Builds the service from configuration, honoring `redis.enabled`.
    pub fn from_config(config: &RedisConfig) -> LookasideResult<Self> {
        if !config.enabled {
            info!("Redis cache disabled by configuration");
            return Ok(Self::disabled());
        }
        Ok(Self::new(Arc::new(create_redis_pool(config)?)))
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> LookasideResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                LookasideError::cache_unavailable(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(LookasideError::cache_unavailable("Cache is disabled")),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> LookasideResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let bytes: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| command_error("get", key, e))?;
        let value = bytes
            .map(|b| {
                String::from_utf8(b).map_err(|e| {
                    LookasideError::Serialization(format!(
                        "Value at key '{}' is not UTF-8: {}",
                        key, e
                    ))
                })
            })
            .transpose()?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> LookasideResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| command_error("set", key, e))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> LookasideResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| command_error("delete", key, e))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn ping(&self) -> LookasideResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map_err(|e| LookasideError::cache_unavailable(format!("PING failed: {}", e)))?;
        Ok(())
    }
}

/// Maps a failed command. A value of the wrong shape (a non-string reply
/// or a key holding another Redis type) is a `Serialization` error so the
/// caller can evict it; anything else means the cache is unavailable.
fn command_error(operation: &str, key: &str, err: RedisError) -> LookasideError {
    if err.kind() == ErrorKind::TypeError || err.code() == Some("WRONGTYPE") {
        LookasideError::Serialization(format!(
            "Unusable value at key '{}' on {}: {}",
            key, operation, err
        ))
    } else {
        LookasideError::cache_unavailable(format!(
            "Failed to {} key '{}': {}",
            operation, key, err
        ))
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheService")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
