//! Vibes Node - the main application entry point.
//!
//! Architecture:
//! - Single process with one shared RocksDB storage
//! - HTTP API for clients (products, feeds, upvotes, profiles, milestones)

use crate::api;
use crate::error::{Error, Result};
use crate::storage::Storage;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Configuration for a Vibes node.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Data directory for storage
    pub data_dir: PathBuf,

    /// HTTP API listen address
    pub api_addr: SocketAddr,

    /// Seed the default categories on start
    pub seed_categories: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./vibes-data"),
            api_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_categories: true,
        }
    }
}

impl NodeConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup("VIBES_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let api_addr = match lookup("VIBES_API_ADDR") {
            Some(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("VIBES_API_ADDR={}: {}", raw, e)))?,
            None => defaults.api_addr,
        };

        let seed_categories = match lookup("VIBES_SEED_CATEGORIES") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| Error::Config(format!("VIBES_SEED_CATEGORIES={}: expected a boolean", raw)))?,
            None => defaults.seed_categories,
        };

        Ok(Self {
            data_dir,
            api_addr,
            seed_categories,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Shared state for the node - single storage instance shared by all handlers.
pub struct NodeState {
    pub storage: Arc<Storage>,
}

/// A Vibes node instance.
pub struct VibesNode {
    state: Arc<RwLock<NodeState>>,
    config: NodeConfig,
}

impl VibesNode {
    /// Open storage and prepare the node.
    pub async fn new(config: NodeConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let storage = Arc::new(Storage::open(&config.data_dir)?);

        if config.seed_categories {
            storage.init_default_categories()?;
        }

        let state = Arc::new(RwLock::new(NodeState { storage }));

        Ok(Self { state, config })
    }

    /// Get the shared state (for API handlers).
    pub fn state(&self) -> Arc<RwLock<NodeState>> {
        Arc::clone(&self.state)
    }

    /// Run the HTTP server until it stops.
    pub async fn run(self) -> Result<()> {
        tracing::info!("Vibes node starting");
        tracing::info!("  API: http://{}", self.config.api_addr);
        tracing::info!("  Data: {:?}", self.config.data_dir);

        let app = api::build_router(self.state());

        let listener = tokio::net::TcpListener::bind(self.config.api_addr).await?;
        tracing::info!("HTTP server listening on {}", self.config.api_addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = NodeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("./vibes-data"));
        assert_eq!(config.api_addr.port(), 8080);
        assert!(config.seed_categories);
    }

    #[test]
    fn reads_overrides() {
        let config = NodeConfig::from_lookup(lookup(&[
            ("VIBES_DATA_DIR", "/tmp/vibes"),
            ("VIBES_API_ADDR", "127.0.0.1:9999"),
            ("VIBES_SEED_CATEGORIES", "off"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/vibes"));
        assert_eq!(config.api_addr, "127.0.0.1:9999".parse().unwrap());
        assert!(!config.seed_categories);
    }

    #[test]
    fn rejects_bad_values() {
        let err = NodeConfig::from_lookup(lookup(&[("VIBES_API_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.starts_with("VIBES_API_ADDR")));

        let err = NodeConfig::from_lookup(lookup(&[("VIBES_SEED_CATEGORIES", "maybe")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn new_node_seeds_categories() {
        let dir = tempfile::tempdir().unwrap();
        let config = NodeConfig {
            data_dir: dir.path().join("data"),
            ..NodeConfig::default()
        };
        let node = VibesNode::new(config).await.unwrap();
        let state = node.state();
        let state = state.read().await;
        assert!(state.storage.get_category("ai").unwrap().is_some());
    }
}
