//! # Lookaside Core
//!
//! Core types, domain entities, and error definitions shared by every
//! Lookaside crate.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
