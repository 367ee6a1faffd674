//! Caching infrastructure for the service layer.
//!
//! A cache abstraction with a Redis implementation backed by a deadpool
//! connection pool.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::CacheInterface;
pub use redis_cache::{create_redis_pool, RedisCacheService, DEFAULT_TTL};
