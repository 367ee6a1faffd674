//! Direct store lookup, the baseline for the cache-aside path.

use crate::dto::{CacheStatus, CachedUserView};
use crate::user_service::{LookupOutcome, UserLookup};
use async_trait::async_trait;
use lookaside_core::{LookasideError, LookasideResult, UserId};
use lookaside_repository::UserRepository;
use std::sync::Arc;
use tracing::debug;

/// Always reads from the store; never touches the cache.
pub struct DirectReadUserService {
    repository: Arc<dyn UserRepository>,
}

impl DirectReadUserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserLookup for DirectReadUserService {
    async fn get_user(&self, id: UserId) -> LookasideResult<LookupOutcome> {
        debug!("Reading user {} directly from store", id);

        let user = self
            .repository
            .find_user_with_orders(id)
            .await?
            .ok_or_else(|| LookasideError::not_found("User", id))?;

        Ok(LookupOutcome::new(
            CachedUserView::from(&user),
            CacheStatus::RdbDirect,
        ))
    }
}
