//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 server core for static file
//! serving, with keep-alive connections and idle timeouts.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`headers`**: Canonical header-name normalization
//! - **`mime`**: Content-type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌──────────────────┐
//!        │   AwaitRequest   │ ← 5s idle deadline armed, wait for request bytes
//!        └──────┬───────────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │    Dispatch      │ ← Resolve file, build 200 or 404
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Respond       │ ← Serialize and send response
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → AwaitRequest (same connection)
//!               └─ Connection: close → Closed
//! ```
//!
//! Failed read attempts leave `AwaitRequest` directly: a malformed
//! request, a peer close, or a deadline expiry with a partial request
//! pending are each answered with a single 400 before closing, while a
//! pure idle timeout closes the connection with nothing written.
//!
//! # Example
//!
//! ```ignore
//! use attic::config::StaticFilesConfig;
//! use attic::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let docs = StaticFilesConfig::default();
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let docs = docs.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, docs);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

/// The single protocol version this server speaks.
pub const HTTP_VERSION: &str = "HTTP/1.1";
