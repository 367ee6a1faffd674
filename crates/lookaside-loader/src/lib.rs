//! # Lookaside Loader
//!
//! Fills the store with synthetic users and orders for benchmarking the
//! cache-aside read path.

pub mod bulk_loader;
pub mod generator;
pub mod partition;

pub use bulk_loader::{BulkLoader, LoadReport};
pub use generator::{user_for, OrderGenerator, PRODUCTS};
pub use partition::partition;
