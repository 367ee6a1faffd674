//! Cache failure policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the cache-aside read does when the cache backend cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CacheFailurePolicy {
    /// Serve the request from the data store and report a miss.
    #[default]
    Degrade,
    /// Fail the request with `CacheUnavailable`.
    FailFast,
}

impl CacheFailurePolicy {
    /// Returns true if cache outages fall back to the data store.
    #[must_use]
    pub const fn degrades(&self) -> bool {
        matches!(self, Self::Degrade)
    }
}

impl fmt::Display for CacheFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrade => write!(f, "degrade"),
            Self::FailFast => write!(f, "fail_fast"),
        }
    }
}

impl FromStr for CacheFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "degrade" => Ok(Self::Degrade),
            "fail_fast" => Ok(Self::FailFast),
            other => Err(format!("unknown cache failure policy: {}", other)),
        }
    }
}
