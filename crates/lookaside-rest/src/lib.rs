//! # Lookaside REST
//!
//! REST API layer using Axum. Exposes the cache-aside and direct lookups
//! side by side so their latency can be compared, plus health checks and
//! the OpenAPI document.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
