//! Vibes Node binary

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vibes_node::{NodeConfig, VibesNode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vibes_node=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vibes Node");

    let config = NodeConfig::from_env()?;

    let node = VibesNode::new(config).await?;
    node.run().await?;

    Ok(())
}
