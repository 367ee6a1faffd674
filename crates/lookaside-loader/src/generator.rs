//! Synthetic users and orders.

use chrono::{Duration, NaiveDateTime};
use lookaside_core::{NewOrder, User, UserId};
use rand::Rng;

/// Product catalogue orders are drawn from.
pub const PRODUCTS: [&str; 10] = [
    "Laptop", "Mouse", "Keyboard", "Monitor", "Headset", "Webcam", "SSD", "RAM", "GPU", "CPU",
];

/// Lowest generated price (inclusive).
pub const MIN_PRICE: i32 = 10_000;
/// Highest generated price (exclusive).
pub const MAX_PRICE: i32 = 100_000;
/// Orders are dated up to this many days in the past.
pub const MAX_AGE_DAYS: i64 = 364;

/// Deterministic user for an id: `User{id}`, aged 20 to 49.
#[must_use]
pub fn user_for(id: i64) -> User {
    User::new(UserId::new(id), format!("User{}", id), 20 + id.rem_euclid(30) as i32)
}

/// Random order generator.
#[derive(Debug, Clone)]
pub struct OrderGenerator {
    min_orders: u32,
    max_orders: u32,
    now: NaiveDateTime,
}

impl OrderGenerator {
    /// Orders per user are drawn from `min_orders..=max_orders` and dated
    /// relative to `now`.
    #[must_use]
    pub fn new(min_orders: u32, max_orders: u32, now: NaiveDateTime) -> Self {
        Self {
            min_orders: min_orders.min(max_orders),
            max_orders,
            now,
        }
    }

    /// Generates the orders of one user.
    pub fn orders_for<R: Rng>(&self, rng: &mut R, user_id: UserId) -> Vec<NewOrder> {
        let count = rng.random_range(self.min_orders..=self.max_orders);
        (0..count)
            .map(|_| {
                let product = PRODUCTS[rng.random_range(0..PRODUCTS.len())];
                let price = rng.random_range(MIN_PRICE..MAX_PRICE);
                let days_ago = rng.random_range(0..=MAX_AGE_DAYS);
                NewOrder::new(user_id, product, price, self.now - Duration::days(days_ago))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_user_for() {
        let user = user_for(1);
        assert_eq!(user.name, "User1");
        assert_eq!(user.age, 21);
        assert!(user.orders.is_empty());
        assert_eq!(user_for(30).age, 20);
        assert_eq!(user_for(59).age, 49);
    }

    #[test]
    fn test_orders_respect_bounds() {
        let generator = OrderGenerator::new(10, 15, now());
        let mut rng = StdRng::seed_from_u64(42);

        for id in 1..=200 {
            let orders = generator.orders_for(&mut rng, UserId::new(id));
            assert!((10..=15).contains(&orders.len()));
            for order in orders {
                assert_eq!(order.user_id, UserId::new(id));
                assert!(PRODUCTS.contains(&order.product_name.as_str()));
                assert!((MIN_PRICE..MAX_PRICE).contains(&order.price));
                assert!(order.order_date <= now());
                assert!(order.order_date >= now() - Duration::days(MAX_AGE_DAYS));
            }
        }
    }

    #[test]
    fn test_same_seed_same_orders() {
        let generator = OrderGenerator::new(10, 15, now());
        let a = generator.orders_for(&mut StdRng::seed_from_u64(7), UserId::new(1));
        let b = generator.orders_for(&mut StdRng::seed_from_u64(7), UserId::new(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_count() {
        let generator = OrderGenerator::new(3, 3, now());
        let orders = generator.orders_for(&mut StdRng::seed_from_u64(1), UserId::new(9));
        assert_eq!(orders.len(), 3);
    }
}
