use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::files::resolver::Resolver;
use crate::files::root::FileSource;
use crate::http::parser::{parse_request, request_len};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

pub struct Connection<S, F> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    resolver: Arc<Resolver<F>>,
    idle_timeout: Duration,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S, F> Connection<S, F>
where
    S: AsyncRead + AsyncWrite + Unpin,
    F: FileSource,
{
    pub fn new(stream: S, resolver: Arc<Resolver<F>>, idle_timeout: Duration) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            resolver,
            idle_timeout,
        }
    }

    /// Serves exactly one request, then closes.
    ///
    /// Errors mean the connection ended without a response being written.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = self
                        .resolver
                        .resolve(req)
                        .await
                        .context("failed to resolve request")?;

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    debug!(bytes = writer.len(), "Response written");

                    if let Err(e) = self.stream.shutdown().await {
                        debug!(error = %e, "Shutdown after response failed");
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until one request is complete, the peer closes, or the idle
    /// timeout expires.
    ///
    /// Returns `Ok(None)` when there is nothing to answer.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            if let Some(len) = request_len(&self.buffer) {
                let request = parse_request(&self.buffer[..len]).context("malformed request")?;
                return Ok(Some(request));
            }

            let read = timeout(self.idle_timeout, self.stream.read_buf(&mut self.buffer)).await;
            let n = match read {
                Ok(n) => n?,
                Err(_) => {
                    warn!(
                        idle_secs = self.idle_timeout.as_secs_f64(),
                        "Idle timeout, dropping connection"
                    );
                    return Ok(None);
                }
            };

            if n == 0 {
                // Peer closed; answer whatever arrived, if anything
                if self.buffer.iter().all(u8::is_ascii_whitespace) {
                    return Ok(None);
                }

                let request = parse_request(&self.buffer).context("malformed request")?;
                return Ok(Some(request));
            }
        }
    }
}
