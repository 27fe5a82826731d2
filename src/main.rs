use std::sync::Arc;

use lantern::config::Config;
use lantern::files::{Resolver, ServedRoot};
use lantern::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let resolver = Arc::new(Resolver::new(ServedRoot::new(&cfg.root)));
    resolver.verify_status_pages().await?;
    tracing::info!(root = %cfg.root.display(), "Serving files");

    tokio::select! {
        res = server::listener::run(&cfg, resolver) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
