// crates/event-ingress-server/src/server.rs
// ============================================================================
// Module: Ingress Endpoint
// Description: axum application serving the inbound dispatch endpoint.
// Purpose: Turn HTTP requests into messages and dispatch results into status.
// Dependencies: event-ingress-core, event-ingress-config, axum, tokio
// ============================================================================

//! ## Overview
//! One path-agnostic POST endpoint: the original ingress accepts events on
//! any path, so routing uses a fallback handler rather than a fixed route.
//! The handler enforces the body size cap, builds a [`Message`] from the
//! forwardable headers, and delegates to the injected [`MessageHandler`].
//! Dispatch success maps to 202 Accepted; dispatch failure maps to 500.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::Method;
use axum::http::StatusCode;
use bytes::Bytes;
use event_ingress_config::ServerConfig;
use event_ingress_core::Message;
use event_ingress_core::MessageHandler;
use thiserror::Error;

// ============================================================================
// SECTION: Server Errors
// ============================================================================

/// Errors returned by the ingress server.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("ingress bind failed on {addr}: {reason}")]
    Bind {
        /// Address that failed to bind.
        addr: SocketAddr,
        /// Underlying bind error text.
        reason: String,
    },
    /// The server loop terminated with an error.
    #[error("ingress server failed: {0}")]
    Serve(String),
}

// ============================================================================
// SECTION: Ingress Server
// ============================================================================

/// Shared state for the ingress handler.
struct ServerState {
    /// Message consumer invoked for every received message.
    handler: Arc<dyn MessageHandler>,
    /// Maximum accepted request body size in bytes.
    max_body_bytes: usize,
}

/// HTTP ingress server instance.
pub struct IngressServer {
    /// Listen address.
    bind: SocketAddr,
    /// Shared handler state.
    state: Arc<ServerState>,
}

impl IngressServer {
    /// Builds an ingress server from server settings and a message handler.
    #[must_use]
    pub fn new(config: &ServerConfig, handler: Arc<dyn MessageHandler>) -> Self {
        Self {
            bind: config.bind,
            state: Arc::new(ServerState {
                handler,
                max_body_bytes: config.max_body_bytes,
            }),
        }
    }

    /// Serves inbound requests until shutdown is signalled.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        let app = Router::new().fallback(handle_ingress).with_state(Arc::clone(&self.state));
        let listener =
            tokio::net::TcpListener::bind(self.bind).await.map_err(|err| ServerError::Bind {
                addr: self.bind,
                reason: err.to_string(),
            })?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|err| ServerError::Serve(err.to_string()))
    }
}

/// Resolves when the process receives an interrupt signal.
async fn shutdown_signal() {
    // Serve forever if the signal handler cannot be installed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

// ============================================================================
// SECTION: Request Handling
// ============================================================================

/// Handles one inbound request on any path.
async fn handle_ingress(
    State(state): State<Arc<ServerState>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    if method != Method::POST {
        return StatusCode::METHOD_NOT_ALLOWED;
    }
    if body.len() > state.max_body_bytes {
        return StatusCode::PAYLOAD_TOO_LARGE;
    }
    let message = message_from_request(&headers, &body);
    match state.handler.on_message(&message).await {
        Ok(()) => StatusCode::ACCEPTED,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Adapts request metadata and body into a core message.
///
/// Non-UTF-8 header values cannot be represented on a message and are
/// dropped; the header allowlist itself lives in the core message model.
fn message_from_request(headers: &HeaderMap, body: &Bytes) -> Message {
    let header_pairs = headers.iter().filter_map(|(name, value)| {
        value.to_str().ok().map(|value| (name.as_str(), value.to_string()))
    });
    Message::new(header_pairs, body.to_vec())
}
