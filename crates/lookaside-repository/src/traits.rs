//! Repository trait definitions.

use async_trait::async_trait;
use lookaside_core::{LookasideResult, NewOrder, User, UserId};

/// Read side of the relational store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Loads a user together with every order it owns in a single round
    /// trip. Returns `Ok(None)` when no user has this id.
    async fn find_user_with_orders(&self, id: UserId) -> LookasideResult<Option<User>>;
}

/// Write side used by the bulk loader.
#[async_trait]
pub trait UserWriter: Send + Sync {
    /// Inserts users (their `orders` are ignored). Returns rows written.
    async fn insert_users(&self, users: &[User]) -> LookasideResult<u64>;

    /// Inserts orders; ids are assigned by the store. Returns rows written.
    async fn insert_orders(&self, orders: &[NewOrder]) -> LookasideResult<u64>;

    /// Counts all users.
    async fn count_users(&self) -> LookasideResult<u64>;

    /// Counts all orders.
    async fn count_orders(&self) -> LookasideResult<u64>;
}
