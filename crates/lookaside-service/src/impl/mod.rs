//! User lookup implementations.

mod cache_aside_service;
mod direct_read_service;

pub use cache_aside_service::{CacheAsideSettings, CacheAsideUserService};
pub use direct_read_service::DirectReadUserService;
