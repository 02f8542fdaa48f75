//! Upvote model.

use serde::{Deserialize, Serialize};

/// One user's vote on one product. At most one exists per pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Upvote {
    pub product_id: String,
    pub user_id: String,
    /// Creation time, unix millis
    pub created_at: u64,
}

impl Upvote {
    /// Storage key prefix for upvotes.
    pub const KEY_PREFIX: &'static str = "upvote";

    /// Storage key for a (product, user) pair.
    pub fn key(product_id: &str, user_id: &str) -> String {
        format!("{}:{}:{}", Self::KEY_PREFIX, product_id, user_id)
    }

    /// Key prefix covering every upvote on a product.
    pub fn product_prefix(product_id: &str) -> String {
        format!("{}:{}:", Self::KEY_PREFIX, product_id)
    }
}

/// Result of toggling an upvote.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct UpvoteOutcome {
    /// Whether the user holds an upvote after the toggle
    pub upvoted: bool,
    /// Product tally after the toggle
    pub upvote_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_nest_under_product() {
        let key = Upvote::key("abc", "user-1");
        assert_eq!(key, "upvote:abc:user-1");
        assert!(key.starts_with(&Upvote::product_prefix("abc")));
        assert!(!key.starts_with(&Upvote::product_prefix("ab")));
    }
}
