//! Domain entities for the user/order aggregate.

pub mod entities;

pub use entities::*;
