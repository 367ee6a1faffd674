//! User aggregate.

use super::Order;
use crate::UserId;

/// A user together with its complete order history.
///
/// Repositories only hand out fully materialized aggregates: `orders` is
/// never a partial or lazy view of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Externally assigned identifier.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Age in years.
    pub age: i32,

    /// Orders in store order (ascending order id).
    pub orders: Vec<Order>,
}

impl User {
    /// Creates a user without orders.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            orders: Vec::new(),
        }
    }

    /// Replaces the order collection.
    #[must_use]
    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    /// Returns `true` if every order references this user.
    #[must_use]
    pub fn owns_all_orders(&self) -> bool {
        self.orders.iter().all(|order| order.user_id == self.id)
    }

    /// Number of orders in the aggregate.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
