//! Catalog models for the Vibes node.
//!
//! # Core Types
//!
//! - [`Product`] - A submitted product with its vote tally
//! - [`Category`] - Product categorization
//! - [`Profile`] - A user's public profile
//! - [`Upvote`] - One user's vote on one product
//!
//! # Views
//!
//! - [`ProductView`] - A product decorated with its milestone progress and badge

mod category;
mod product;
mod profile;
mod upvote;

pub use category::Category;
pub use product::{Product, ProductView};
pub use profile::Profile;
pub use upvote::{Upvote, UpvoteOutcome};

/// Current wall-clock time in unix milliseconds.
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
