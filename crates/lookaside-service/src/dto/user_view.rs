//! Cached user view DTOs.

use chrono::NaiveDateTime;
use lookaside_core::LookasideResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Self-contained snapshot of a user and its orders.
///
/// This is the only shape written to the cache. Orders carry no reference
/// back to their user; ownership is implied by nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CachedUserView {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "User1")]
    pub name: String,
    #[schema(example = 41)]
    pub age: i32,
    pub orders: Vec<OrderView>,
}

/// One order inside a [`CachedUserView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: i64,
    #[schema(example = "Mouse")]
    pub product_name: String,
    #[schema(example = 15000)]
    pub price: i32,
    /// Local date-time, ISO-8601 without offset.
    #[schema(value_type = String, example = "2024-05-01T10:30:00")]
    pub order_date: NaiveDateTime,
}

impl CachedUserView {
    /// Encodes the view into its cache wire form.
    pub fn encode(&self) -> LookasideResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a cache entry. Malformed input is a `Serialization` error.
    pub fn decode(raw: &str) -> LookasideResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
