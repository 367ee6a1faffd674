//! Cache key generators for consistent key naming.

use lookaside_core::UserId;

/// Generate the cache key for a user view.
///
/// With an empty prefix the key is just the stringified id, which is the
/// layout other readers of the same Redis expect.
#[must_use]
pub fn user_by_id(prefix: &str, id: UserId) -> String {
    format!("{}{}", prefix, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_is_bare_id() {
        assert_eq!(user_by_id("", UserId::new(1)), "1");
        assert_eq!(user_by_id("", UserId::new(100_000)), "100000");
    }

    #[test]
    fn test_prefixed_key() {
        assert_eq!(user_by_id("lookaside:user:", UserId::new(42)), "lookaside:user:42");
    }
}
