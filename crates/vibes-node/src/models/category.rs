//! Category model for product organization.

use serde::{Deserialize, Serialize};

/// A category products are launched under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique identifier (slug)
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Description
    pub description: Option<String>,

    /// Icon identifier
    pub icon: Option<String>,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            icon: None,
        }
    }

    fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Storage key prefix for categories.
    pub const KEY_PREFIX: &'static str = "category";

    /// Categories seeded on first start.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("ai", "AI").with_icon("icon-cpu"),
            Self::new("developer-tools", "Developer Tools").with_icon("icon-terminal"),
            Self::new("productivity", "Productivity").with_icon("icon-check-square"),
            Self::new("design", "Design").with_icon("icon-pen-tool"),
            Self::new("marketing", "Marketing").with_icon("icon-megaphone"),
            Self::new("fintech", "Fintech").with_icon("icon-dollar-sign"),
            Self::new("health", "Health").with_icon("icon-heart"),
            Self::new("education", "Education").with_icon("icon-book"),
        ]
    }
}
