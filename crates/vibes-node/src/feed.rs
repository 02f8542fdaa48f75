//! Product feeds.
//!
//! A feed is an ordering of the catalog, optionally narrowed to one category:
//!
//! - **Trending**: most upvotes first
//! - **New**: most recently launched first
//! - **Rising**: launched within the last week, fastest-growing first
//!
//! Ranking is pure: the caller supplies the current time.

use crate::error::Error;
use crate::models::Product;
use serde::Deserialize;
use std::cmp::Ordering;
use std::str::FromStr;

/// Products older than this never appear in the Rising feed.
pub const RISING_WINDOW_MS: u64 = 7 * 24 * 60 * 60 * 1000;

/// Velocity denominators never drop below one hour.
pub const MIN_AGE_MS: u64 = 60 * 60 * 1000;

/// Page size when no limit is requested.
pub const DEFAULT_LIMIT: usize = 50;

/// Largest page a caller may request.
pub const MAX_LIMIT: usize = 200;

/// Feed ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Feed {
    #[default]
    Trending,
    New,
    Rising,
}

impl FromStr for Feed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trending" => Ok(Feed::Trending),
            "new" => Ok(Feed::New),
            "rising" => Ok(Feed::Rising),
            other => Err(Error::InvalidInput(format!("unknown feed: {}", other))),
        }
    }
}

impl TryFrom<String> for Feed {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A feed selection as requested by a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    #[serde(default)]
    pub feed: Feed,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

impl FeedQuery {
    /// Trending products in one category.
    pub fn category(id: impl Into<String>) -> Self {
        Self {
            feed: Feed::Trending,
            category: Some(id.into()),
            limit: None,
        }
    }

    /// Effective page size.
    pub fn page_size(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Filter, rank and truncate a product list.
    pub fn apply(&self, mut products: Vec<Product>, now_ms: u64) -> Vec<Product> {
        if let Some(ref category) = self.category {
            products.retain(|p| &p.category_id == category);
        }
        let mut ranked = rank(products, self.feed, now_ms);
        ranked.truncate(self.page_size());
        ranked
    }
}

/// Order products for a feed.
pub fn rank(mut products: Vec<Product>, feed: Feed, now_ms: u64) -> Vec<Product> {
    match feed {
        Feed::Trending => products.sort_by(by_votes),
        Feed::New => products.sort_by(by_newest),
        Feed::Rising => {
            let cutoff = now_ms.saturating_sub(RISING_WINDOW_MS);
            products.retain(|p| p.created_at >= cutoff);
            products.sort_by(|a, b| {
                velocity(b, now_ms)
                    .total_cmp(&velocity(a, now_ms))
                    .then_with(|| by_votes(a, b))
            });
        }
    }
    products
}

/// Upvotes per hour since launch.
pub fn velocity(product: &Product, now_ms: u64) -> f64 {
    let age_ms = now_ms.saturating_sub(product.created_at).max(MIN_AGE_MS);
    let hours = age_ms as f64 / MIN_AGE_MS as f64;
    product.upvote_count as f64 / hours
}

fn by_votes(a: &Product, b: &Product) -> Ordering {
    b.upvote_count
        .cmp(&a.upvote_count)
        .then_with(|| by_newest(a, b))
}

fn by_newest(a: &Product, b: &Product) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.id.cmp(&b.id))
}
