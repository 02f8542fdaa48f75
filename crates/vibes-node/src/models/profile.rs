//! Profile model.

use serde::{Deserialize, Serialize};

/// A user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// User ID, supplied by the caller
    pub id: String,

    /// Handle shown on products and comments
    pub username: String,

    pub display_name: Option<String>,

    pub bio: Option<String>,

    pub avatar_url: Option<String>,

    pub website_url: Option<String>,

    /// Creation time, unix millis
    pub created_at: u64,
}

impl Profile {
    /// Create a profile with only the required fields.
    pub fn new(id: impl Into<String>, username: impl Into<String>, created_at: u64) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            display_name: None,
            bio: None,
            avatar_url: None,
            website_url: None,
            created_at,
        }
    }

    /// Storage key prefix for profiles.
    pub const KEY_PREFIX: &'static str = "profile";
}
