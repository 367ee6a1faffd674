//! Data Transfer Objects (DTOs).

mod lookup_dto;
mod user_view;

pub use lookup_dto::*;
pub use user_view::*;
