//! `postbox` binary.
//!
//! ```text
//! RUST_LOG=postbox=debug postbox --bind 127.0.0.1:5002
//! ```

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use postbox::config::Config;
use postbox::posts::{self, PostStore};
use postbox::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    info!(bind = %config.bind, id_strategy = ?config.id_strategy, seeded = !config.no_seed, "starting postbox");

    let seed = if config.no_seed { Vec::new() } else { posts::seed() };
    let store = Arc::new(PostStore::with_posts(config.id_strategy, seed));

    Server::bind(config.bind)
        .serve(postbox::app(&store))
        .await
        .with_context(|| format!("failed to serve on {}", config.bind))?;

    Ok(())
}
