//! User lookup trait definition.

use crate::dto::{CacheStatus, CachedUserView};
use async_trait::async_trait;
use lookaside_core::{LookasideResult, UserId};

/// Result of one lookup before timing is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub user: CachedUserView,
    pub status: CacheStatus,
}

impl LookupOutcome {
    #[must_use]
    pub const fn new(user: CachedUserView, status: CacheStatus) -> Self {
        Self { user, status }
    }

    /// Returns `true` if the view came out of the cache.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        self.status == CacheStatus::RedisHit
    }
}

/// Read path for a user and its orders.
///
/// Missing users are `LookasideError::NotFound`.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Gets a user view by ID.
    async fn get_user(&self, id: UserId) -> LookasideResult<LookupOutcome>;
}
