//! Order entity.

use crate::{OrderId, UserId};
use chrono::NaiveDateTime;

/// An order owned by exactly one user.
///
/// `user_id` is the back-reference to the owning aggregate. It exists only
/// on the store side; the cached view never carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Store-assigned identifier.
    pub id: OrderId,

    /// Owning user.
    pub user_id: UserId,

    /// Product name.
    pub product_name: String,

    /// Price in the minor currency unit.
    pub price: i32,

    /// When the order was placed (local, timezone-naive).
    pub order_date: NaiveDateTime,
}

/// An order that has not been inserted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub product_name: String,
    pub price: i32,
    pub order_date: NaiveDateTime,
}

impl NewOrder {
    /// Creates a new, not yet persisted, order for `user_id`.
    #[must_use]
    pub fn new(
        user_id: UserId,
        product_name: impl Into<String>,
        price: i32,
        order_date: NaiveDateTime,
    ) -> Self {
        Self {
            user_id,
            product_name: product_name.into(),
            price,
            order_date,
        }
    }

    /// Attaches the store-assigned id.
    #[must_use]
    pub fn persisted(self, id: OrderId) -> Order {
        Order {
            id,
            user_id: self.user_id,
            product_name: self.product_name,
            price: self.price,
            order_date: self.order_date,
        }
    }
}
