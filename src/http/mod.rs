//! Request/response protocol handling.
//!
//! Every connection carries exactly one request and one response; there is no
//! keep-alive, chunking or compression.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine driving read, resolve and write
//! - **`parser`**: Turns raw request bytes into a [`request::Request`]
//! - **`request`**: Request representation, methods and query-string splitting
//! - **`mime`**: MIME classification by file extension and `Accept` matching
//! - **`response`**: Response representation and the per-status constructors
//! - **`writer`**: Serializes responses and writes them to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for a complete request (or EOF / idle timeout)
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve against the served root
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use lantern::files::{Resolver, ServedRoot};
//! use lantern::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let resolver = Arc::new(Resolver::new(ServedRoot::new("public")));
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let resolver = Arc::clone(&resolver);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, resolver, Duration::from_secs(10));
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
