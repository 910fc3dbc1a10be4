//! Todo HTTP server binary.
//!
//! Binds the socket address named by `JOTTER_ADDR` (default
//! `127.0.0.1:3000`) and serves the todo API over HTTP/1 until the
//! process is stopped. Log verbosity follows `RUST_LOG`, defaulting to
//! `info`.

use jotter::http;
use jotter::todo::{adapters::memory::InMemoryTodoRepository, services::TodoService};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the socket address to bind.
const ADDR_ENV: &str = "JOTTER_ADDR";

/// Fallback bind address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Errors terminating the server process.
#[derive(Debug, Error)]
enum MainError {
    /// The configured bind address does not parse.
    #[error("invalid JOTTER_ADDR value '{value}': {source}")]
    InvalidAddr {
        /// The rejected address text.
        value: String,
        /// Parser failure.
        source: std::net::AddrParseError,
    },

    /// The server loop failed.
    #[error(transparent)]
    Server(#[from] http::ServerError),
}

/// Reads the bind address from the environment.
fn bind_addr() -> Result<SocketAddr, MainError> {
    let value = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
    value
        .parse()
        .map_err(|source| MainError::InvalidAddr { value, source })
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = bind_addr()?;
    let repository = Arc::new(InMemoryTodoRepository::new());
    let service = TodoService::new(repository);
    http::serve(service, addr).await?;
    Ok(())
}
