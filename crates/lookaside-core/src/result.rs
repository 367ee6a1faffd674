//! Result type aliases for Lookaside.

use crate::LookasideError;

/// A specialized `Result` type for Lookaside operations.
pub type LookasideResult<T> = Result<T, LookasideError>;
