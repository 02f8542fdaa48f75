//! Product model - a launched product and its vote tally.

use serde::{Deserialize, Serialize};
use vibes_milestones::{BadgeTier, MilestoneProgress, VoteCount};

/// A product submitted to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier (Blake3 hash of maker, name and creation time)
    pub id: String,

    /// Product name
    pub name: String,

    /// One-line pitch
    pub tagline: String,

    /// Longer description
    pub description: Option<String>,

    /// Product homepage
    pub website_url: Option<String>,

    /// Thumbnail image URL
    pub thumbnail_url: Option<String>,

    /// Category ID (links to Category)
    pub category_id: String,

    /// Profile ID of the submitter
    pub maker_id: String,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Creation time, unix millis
    pub created_at: u64,

    /// Number of upvotes currently held
    #[serde(default)]
    pub upvote_count: u64,
}

impl Product {
    /// Create a new product with no votes.
    pub fn new(
        name: String,
        tagline: String,
        category_id: String,
        maker_id: String,
        created_at: u64,
    ) -> Self {
        let id = Self::generate_id(&name, &maker_id, created_at);
        Self {
            id,
            name,
            tagline,
            description: None,
            website_url: None,
            thumbnail_url: None,
            category_id,
            maker_id,
            tags: Vec::new(),
            created_at,
            upvote_count: 0,
        }
    }

    /// Derive an ID from the maker, name and creation time.
    pub fn generate_id(name: &str, maker_id: &str, created_at: u64) -> String {
        let hash = blake3::hash(format!("{}:{}:{}", maker_id, name, created_at).as_bytes());
        hex::encode(hash.as_bytes())
    }

    /// Storage key prefix for products.
    pub const KEY_PREFIX: &'static str = "product";

    /// Current votes as an engine input.
    pub fn votes(&self) -> VoteCount {
        VoteCount::new(self.upvote_count)
    }
}

/// A product as served by the API, with its derived milestone state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub milestone: MilestoneProgress,
    pub badge: Option<BadgeTier>,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let votes = product.votes();
        Self {
            milestone: MilestoneProgress::for_votes(votes),
            badge: BadgeTier::for_votes(votes),
            product,
        }
    }
}
