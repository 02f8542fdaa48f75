//! Vibes Node - Product Discovery Backend
//!
//! Keeps a product catalog, serves the discovery feeds, tracks upvotes and
//! decorates every product with its milestone progress and badge.
//!
//! # Architecture
//!
//! - **Models**: Catalog records (Product, Category, Profile, Upvote)
//! - **Storage**: RocksDB-backed persistent storage
//! - **Feeds**: Trending / New / Rising ranking
//! - **API**: HTTP endpoints for the catalog and the milestone engine
//!
//! # Example
//!
//! ```no_run
//! use vibes_node::{NodeConfig, VibesNode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NodeConfig::from_env()?;
//!     let node = VibesNode::new(config).await?;
//!     node.run().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod extract;
pub mod feed;
pub mod models;
pub mod node;
pub mod storage;

pub use error::{Error, Result};
pub use feed::{Feed, FeedQuery};
pub use models::{Category, Product, ProductView, Profile, Upvote, UpvoteOutcome};
pub use node::{NodeConfig, VibesNode};
pub use storage::Storage;
