//! Persistent storage using RocksDB.
//!
//! Every record is JSON under a `<kind>:<id>` key. Upvotes nest under their
//! product (`upvote:<product>:<user>`) so a product's votes can be dropped
//! with one prefix scan.

use crate::error::{Error, Result};
use crate::models::{now_millis, Category, Product, Profile, Upvote, UpvoteOutcome};
use rocksdb::{Options, WriteBatch, DB};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Storage backend for the product catalog.
pub struct Storage {
    db: DB,
}

impl Storage {
    /// Open or create storage at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        let db = DB::open(&opts, path)?;
        Ok(Self { db })
    }

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.db.get(key.as_bytes())? {
            Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
            None => Ok(None),
        }
    }

    fn scan_json<T: DeserializeOwned>(&self, prefix: &str) -> Result<Vec<T>> {
        let prefix = prefix.as_bytes();
        let mut items = Vec::new();

        for item in self.db.prefix_iterator(prefix) {
            let (key, value) = item?;
            if !key.starts_with(prefix) {
                break;
            }
            items.push(serde_json::from_slice(&value)?);
        }

        Ok(items)
    }

    // --- Products ---

    fn product_key(id: &str) -> String {
        format!("{}:{}", Product::KEY_PREFIX, id)
    }

    /// Store a product.
    pub fn put_product(&self, product: &Product) -> Result<()> {
        let value = serde_json::to_vec(product)?;
        self.db.put(Self::product_key(&product.id).as_bytes(), value)?;
        Ok(())
    }

    /// Store a new product, refusing to overwrite one with the same ID.
    ///
    /// Callers hold the node's write lock, so the check and the write cannot
    /// interleave with another insert.
    pub fn insert_product(&self, product: &Product) -> Result<()> {
        if self.db.get(Self::product_key(&product.id).as_bytes())?.is_some() {
            return Err(Error::Conflict(format!("product {} already exists", product.id)));
        }
        self.put_product(product)
    }

    /// Get a product by ID.
    pub fn get_product(&self, id: &str) -> Result<Option<Product>> {
        self.get_json(&Self::product_key(id))
    }

    /// Delete a product and every upvote on it.
    ///
    /// Returns `false` if the product did not exist.
    pub fn delete_product(&self, id: &str) -> Result<bool> {
        if self.get_product(id)?.is_none() {
            return Ok(false);
        }

        let mut batch = WriteBatch::default();
        batch.delete(Self::product_key(id).as_bytes());

        let prefix = Upvote::product_prefix(id);
        for item in self.db.prefix_iterator(prefix.as_bytes()) {
            let (key, _) = item?;
            if !key.starts_with(prefix.as_bytes()) {
                break;
            }
            batch.delete(&key);
        }

        self.db.write(batch)?;
        Ok(true)
    }

    /// List all products.
    pub fn list_products(&self) -> Result<Vec<Product>> {
        self.scan_json(&format!("{}:", Product::KEY_PREFIX))
    }

    /// Products submitted by a maker.
    pub fn list_products_by_maker(&self, maker_id: &str) -> Result<Vec<Product>> {
        let mut products = self.list_products()?;
        products.retain(|p| p.maker_id == maker_id);
        Ok(products)
    }

    // --- Upvotes ---

    /// Whether a user currently upvotes a product.
    pub fn has_upvoted(&self, product_id: &str, user_id: &str) -> Result<bool> {
        Ok(self.db.get(Upvote::key(product_id, user_id).as_bytes())?.is_some())
    }

    /// Add the user's upvote if absent, remove it if present.
    ///
    /// The vote record and the product tally are written in one batch. Callers
    /// must serialize toggles on the same product; the node does so with its
    /// state write lock.
    pub fn toggle_upvote(&self, product_id: &str, user_id: &str) -> Result<UpvoteOutcome> {
        let mut product = self
            .get_product(product_id)?
            .ok_or_else(|| Error::NotFound(format!("product {}", product_id)))?;

        let key = Upvote::key(product_id, user_id);
        let mut batch = WriteBatch::default();

        let upvoted = if self.db.get(key.as_bytes())?.is_some() {
            batch.delete(key.as_bytes());
            product.upvote_count = product.upvote_count.saturating_sub(1);
            false
        } else {
            let upvote = Upvote {
                product_id: product_id.to_string(),
                user_id: user_id.to_string(),
                created_at: now_millis(),
            };
            batch.put(key.as_bytes(), serde_json::to_vec(&upvote)?);
            product.upvote_count = product.upvote_count.saturating_add(1);
            true
        };

        batch.put(
            Self::product_key(product_id).as_bytes(),
            serde_json::to_vec(&product)?,
        );
        self.db.write(batch)?;

        Ok(UpvoteOutcome {
            upvoted,
            upvote_count: product.upvote_count,
        })
    }

    /// Products a user has upvoted.
    pub fn list_upvoted_by(&self, user_id: &str) -> Result<Vec<Product>> {
        let upvotes: Vec<Upvote> = self.scan_json(&format!("{}:", Upvote::KEY_PREFIX))?;
        let mut products = Vec::new();
        for upvote in upvotes.into_iter().filter(|u| u.user_id == user_id) {
            if let Some(product) = self.get_product(&upvote.product_id)? {
                products.push(product);
            }
        }
        Ok(products)
    }

    // --- Categories ---

    fn category_key(id: &str) -> String {
        format!("{}:{}", Category::KEY_PREFIX, id)
    }

    /// Store a category.
    pub fn put_category(&self, category: &Category) -> Result<()> {
        let value = serde_json::to_vec(category)?;
        self.db.put(Self::category_key(&category.id).as_bytes(), value)?;
        Ok(())
    }

    /// Get a category by ID.
    pub fn get_category(&self, id: &str) -> Result<Option<Category>> {
        self.get_json(&Self::category_key(id))
    }

    /// Initialize default categories if not present.
    pub fn init_default_categories(&self) -> Result<()> {
        for category in Category::defaults() {
            if self.get_category(&category.id)?.is_none() {
                self.put_category(&category)?;
            }
        }
        Ok(())
    }

    /// List all categories.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        self.scan_json(&format!("{}:", Category::KEY_PREFIX))
    }

    // --- Profiles ---

    fn profile_key(id: &str) -> String {
        format!("{}:{}", Profile::KEY_PREFIX, id)
    }

    /// Create or replace a profile.
    pub fn put_profile(&self, profile: &Profile) -> Result<()> {
        let value = serde_json::to_vec(profile)?;
        self.db.put(Self::profile_key(&profile.id).as_bytes(), value)?;
        Ok(())
    }

    /// Get a profile by user ID.
    pub fn get_profile(&self, id: &str) -> Result<Option<Profile>> {
        self.get_json(&Self::profile_key(id))
    }

    /// Find the profile holding a username.
    pub fn find_profile_by_username(&self, username: &str) -> Result<Option<Profile>> {
        let profiles: Vec<Profile> = self.scan_json(&format!("{}:", Profile::KEY_PREFIX))?;
        Ok(profiles.into_iter().find(|p| p.username == username))
    }
}
