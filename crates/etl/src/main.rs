mod config;
mod pipeline;

use anyhow::Context;
use extract::OllamaClient;
use persist::Neo4jStore;
use tracing::{error, info};

use crate::config::EtlConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        error!("run failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = EtlConfig::from_env().context("invalid configuration")?;

    // Connection is held for the whole run and dropped on every exit path.
    let store = Neo4jStore::connect(
        &config.neo4j.uri,
        &config.neo4j.username,
        &config.neo4j.password,
    )
    .await
    .context("failed to connect to Neo4j")?;
    info!(uri = %config.neo4j.uri, "connected to Neo4j");

    let client = OllamaClient::new(config.llm.base_url.clone(), config.llm.model.clone());

    pipeline::run(&config, client, store).await?;
    Ok(())
}
