//! # Lookaside Service
//!
//! Read path for users and their orders: a cache-aside lookup over Redis,
//! a direct store lookup for comparison, the codec between the domain
//! aggregate and its cached view, and a timing wrapper.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod metrics;
pub mod timing;
pub mod user_service;

#[cfg(test)]
mod test_support;

pub use cache::*;
pub use dto::*;
pub use r#impl::*;
pub use timing::TimedUserLookup;
pub use user_service::*;
