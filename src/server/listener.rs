use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, info_span, Instrument};

use crate::config::Config;
use crate::files::resolver::Resolver;
use crate::files::root::FileSource;
use crate::http::connection::Connection;

pub async fn run<F>(cfg: &Config, resolver: Arc<Resolver<F>>) -> anyhow::Result<()>
where
    F: FileSource + Send + Sync + 'static,
{
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    info!("Listening on {}", cfg.listen_addr);

    serve(listener, resolver, cfg.idle_timeout()).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve<F>(
    listener: TcpListener,
    resolver: Arc<Resolver<F>>,
    idle_timeout: Duration,
) -> anyhow::Result<()>
where
    F: FileSource + Send + Sync + 'static,
{
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let resolver = Arc::clone(&resolver);
        let span = info_span!("conn", %peer);
        tokio::spawn(
            async move {
                let mut conn = Connection::new(socket, resolver, idle_timeout);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error: {:#}", e);
                }
            }
            .instrument(span),
        );
    }
}
