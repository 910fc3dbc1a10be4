//! HTTP/1 server loop for the todo boundary.

use super::routes;
use crate::todo::{ports::TodoRepository, services::TodoService};
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

/// Errors raised while running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding or accepting on the listener failed.
    #[error("listener error: {0}")]
    Listener(#[from] std::io::Error),
}

/// Binds `addr` and serves todo requests until the process stops.
///
/// One task per connection; each request is handled synchronously within
/// its connection. Concurrency control, timeouts, and retries are left to
/// the host environment.
///
/// # Errors
///
/// Returns [`ServerError::Listener`] when the address cannot be bound or
/// an accept fails.
pub async fn serve<R>(service: TodoService<R>, addr: SocketAddr) -> Result<(), ServerError>
where
    R: TodoRepository + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "todo server listening");
    let shared = Arc::new(service);

    loop {
        let (stream, peer) = listener.accept().await?;
        let connection_service = Arc::clone(&shared);
        tokio::task::spawn(async move {
            let io = TokioIo::new(stream);
            let handler = service_fn(move |request: Request<Incoming>| {
                let request_service = Arc::clone(&connection_service);
                async move { handle(&request_service, request).await }
            });
            if let Err(err) = http1::Builder::new().serve_connection(io, handler).await {
                tracing::debug!(%peer, error = %err, "connection error");
            }
        });
    }
}

/// Reads the request body and hands the request to the route dispatcher.
async fn handle<R>(
    service: &TodoService<R>,
    request: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    R: TodoRepository,
{
    let (parts, body) = request.into_parts();
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            tracing::debug!(error = %err, "failed to read request body");
            return Ok(routes::invalid_body());
        }
    };
    let response = routes::dispatch(
        service,
        &parts.method,
        parts.uri.path(),
        parts.uri.query(),
        &bytes,
    )
    .await;
    tracing::debug!(
        method = %parts.method,
        path = parts.uri.path(),
        status = response.status().as_u16(),
        "handled request"
    );
    Ok(response)
}
