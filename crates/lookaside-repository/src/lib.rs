//! # Lookaside Repository
//!
//! Relational store access. Reads materialize a user and all of its orders
//! in one joined query; writes are multi-row inserts used by the loader.
//!
//! ```text
//! Service / Loader
//!   ↓  Arc<dyn UserRepository> / Arc<dyn UserWriter>
//! MySqlUserRepository
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
