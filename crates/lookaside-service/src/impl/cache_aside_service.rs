//! Cache-aside lookup.

use crate::cache::{cache_keys, CacheInterface, DEFAULT_TTL};
use crate::dto::{CacheStatus, CachedUserView};
use crate::metrics::CacheMetrics;
use crate::user_service::{LookupOutcome, UserLookup};
use async_trait::async_trait;
use lookaside_config::{CacheFailurePolicy, RedisConfig};
use lookaside_core::{LookasideError, LookasideResult, UserId};
use lookaside_repository::UserRepository;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Knobs for [`CacheAsideUserService`].
#[derive(Debug, Clone)]
pub struct CacheAsideSettings {
    pub ttl: Duration,
    pub key_prefix: String,
    pub failure_policy: CacheFailurePolicy,
}

impl Default for CacheAsideSettings {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            key_prefix: String::new(),
            failure_policy: CacheFailurePolicy::Degrade,
        }
    }
}

impl From<&RedisConfig> for CacheAsideSettings {
    fn from(config: &RedisConfig) -> Self {
        Self {
            ttl: config.ttl(),
            key_prefix: config.key_prefix.clone(),
            failure_policy: config.failure_policy,
        }
    }
}

/// Serves users from the cache, filling it from the store on a miss.
///
/// Only found users are written back; a missing id leaves the cache
/// untouched. Concurrent misses on one key may both read the store and
/// both write, the last write wins.
pub struct CacheAsideUserService {
    repository: Arc<dyn UserRepository>,
    cache: Arc<dyn CacheInterface>,
    settings: CacheAsideSettings,
}

impl CacheAsideUserService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        cache: Arc<dyn CacheInterface>,
        settings: CacheAsideSettings,
    ) -> Self {
        Self {
            repository,
            cache,
            settings,
        }
    }

    /// Applies the failure policy to a cache backend error.
    fn absorb(&self, operation: &'static str, err: LookasideError) -> LookasideResult<()> {
        if self.settings.failure_policy.degrades() {
            warn!("Cache {} failed, serving from store: {}", operation, err);
            CacheMetrics::degraded(operation);
            Ok(())
        } else {
            Err(err)
        }
    }

    /// Reads the cache. `Ok(None)` covers misses, evicted corrupt entries
    /// and absorbed outages alike.
    async fn read_cache(&self, key: &str) -> LookasideResult<Option<CachedUserView>> {
        let decoded = self
            .cache
            .get_raw(key)
            .await
            .and_then(|raw| raw.as_deref().map(CachedUserView::decode).transpose());

        match decoded {
            Ok(found) => Ok(found),
            Err(LookasideError::Serialization(reason)) => {
                warn!("Evicting undecodable cache entry '{}': {}", key, reason);
                CacheMetrics::evicted();
                if let Err(err) = self.cache.delete(key).await {
                    self.absorb("delete", err)?;
                }
                Ok(None)
            }
            Err(err) if err.is_cache_failure() => {
                self.absorb("get", err)?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl UserLookup for CacheAsideUserService {
    async fn get_user(&self, id: UserId) -> LookasideResult<LookupOutcome> {
        let key = cache_keys::user_by_id(&self.settings.key_prefix, id);

        if let Some(view) = self.read_cache(&key).await? {
            CacheMetrics::hit();
            debug!("Serving user {} from cache", id);
            return Ok(LookupOutcome::new(view, CacheStatus::RedisHit));
        }
        CacheMetrics::miss();

        let user = self
            .repository
            .find_user_with_orders(id)
            .await?
            .ok_or_else(|| LookasideError::not_found("User", id))?;

        let view = CachedUserView::from(&user);
        let encoded = view.encode()?;
        match self.cache.set_raw(&key, &encoded, self.settings.ttl).await {
            Ok(()) => debug!("Cached user {} for {:?}", id, self.settings.ttl),
            Err(err) if err.is_cache_failure() => self.absorb("set", err)?,
            Err(err) => return Err(err),
        }

        Ok(LookupOutcome::new(view, CacheStatus::RedisMiss))
    }
}
