//! MySQL user repository implementation.

use crate::{
    traits::{UserRepository, UserWriter},
    DatabasePoolInterface,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use lookaside_core::{LookasideResult, NewOrder, Order, OrderId, User, UserId};
use sqlx::{FromRow, MySql, QueryBuilder};
use std::sync::Arc;
use tracing::debug;

/// MySQL user repository implementation.
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// One row of the user/orders left join. Order columns are NULL for a
/// user without orders.
#[derive(Debug, FromRow)]
struct UserOrderRow {
    user_id: i64,
    name: String,
    age: i32,
    order_id: Option<i64>,
    product_name: Option<String>,
    price: Option<i32>,
    order_date: Option<NaiveDateTime>,
}

/// Folds the joined rows of a single user into one aggregate.
fn assemble_user(rows: Vec<UserOrderRow>) -> Option<User> {
    let mut rows = rows.into_iter().peekable();
    let first = rows.peek()?;
    let id = UserId::new(first.user_id);
    let mut user = User::new(id, first.name.clone(), first.age);

    for row in rows {
        if let (Some(order_id), Some(product_name), Some(price), Some(order_date)) =
            (row.order_id, row.product_name, row.price, row.order_date)
        {
            user.orders.push(Order {
                id: OrderId::new(order_id),
                user_id: id,
                product_name,
                price,
                order_date,
            });
        }
    }

    Some(user)
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_user_with_orders(&self, id: UserId) -> LookasideResult<Option<User>> {
        debug!("Fetching user with orders: {}", id);

        let rows = sqlx::query_as::<_, UserOrderRow>(
            r#"
            SELECT u.id AS user_id, u.name, u.age,
                   o.id AS order_id, o.product_name, o.price, o.order_date
            FROM users u
            LEFT JOIN orders o ON o.user_id = u.id
            WHERE u.id = ?
            ORDER BY o.id
            "#,
        )
        .bind(id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(assemble_user(rows))
    }
}

#[async_trait]
impl UserWriter for MySqlUserRepository {
    async fn insert_users(&self, users: &[User]) -> LookasideResult<u64> {
        if users.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<MySql> = QueryBuilder::new("INSERT INTO users (id, name, age) ");
        builder.push_values(users, |mut row, user| {
            row.push_bind(user.id.into_inner())
                .push_bind(user.name.clone())
                .push_bind(user.age);
        });

        let result = builder.build().execute(self.pool.inner()).await?;
        debug!("Inserted {} users", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn insert_orders(&self, orders: &[NewOrder]) -> LookasideResult<u64> {
        if orders.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<MySql> =
            QueryBuilder::new("INSERT INTO orders (user_id, product_name, price, order_date) ");
        builder.push_values(orders, |mut row, order| {
            row.push_bind(order.user_id.into_inner())
                .push_bind(order.product_name.clone())
                .push_bind(order.price)
                .push_bind(order.order_date);
        });

        let result = builder.build().execute(self.pool.inner()).await?;
        debug!("Inserted {} orders", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn count_users(&self) -> LookasideResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }

    async fn count_orders(&self) -> LookasideResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for MySqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserRepository").finish_non_exhaustive()
    }
}
