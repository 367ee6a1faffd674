//! Entity-DTO mappers.
//!
//! The aggregate is copied field by field into plain views before anything
//! crosses the cache boundary. Orders keep their store order.

use crate::dto::{CachedUserView, OrderView};
use lookaside_core::{Order, OrderId, User, UserId};

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.into_inner(),
            product_name: order.product_name.clone(),
            price: order.price,
            order_date: order.order_date,
        }
    }
}

impl From<&User> for CachedUserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into_inner(),
            name: user.name.clone(),
            age: user.age,
            orders: user.orders.iter().map(OrderView::from).collect(),
        }
    }
}

impl CachedUserView {
    /// Rebuilds the domain aggregate, re-attaching each order to the
    /// enclosing user id.
    #[must_use]
    pub fn into_domain(self) -> User {
        let user_id = UserId::new(self.id);
        let orders = self
            .orders
            .into_iter()
            .map(|order| Order {
                id: OrderId::new(order.id),
                user_id,
                product_name: order.product_name,
                price: order.price,
                order_date: order.order_date,
            })
            .collect();

        User::new(user_id, self.name, self.age).with_orders(orders)
    }
}
