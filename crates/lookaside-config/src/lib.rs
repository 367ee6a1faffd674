//! # Lookaside Config
//!
//! Configuration management for Lookaside.
//! Supports layered configuration from files and environment variables.

mod app_config;
mod loader;
mod policy;
#[cfg(feature = "telemetry")]
mod telemetry;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use policy::*;
#[cfg(feature = "telemetry")]
pub use telemetry::*;
pub use validation::*;
