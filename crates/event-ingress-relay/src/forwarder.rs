// crates/event-ingress-relay/src/forwarder.rs
// ============================================================================
// Module: HTTP Forwarder
// Description: reqwest-backed delivery to resolved channel endpoints.
// Purpose: Perform one POST per dispatch with the original payload.
// Dependencies: event-ingress-core, reqwest, url
// ============================================================================

//! ## Overview
//! [`HttpForwarder`] POSTs the original message payload and its forwardable
//! headers to the resolved destination with no reply-to and default options.
//! Invariants:
//! - Redirects are rejected; a redirecting destination is a delivery failure.
//! - Non-success status codes fail closed.
//! - Each call performs exactly one request; retries belong to no one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use event_ingress_core::ForwardError;
use event_ingress_core::Forwarder;
use event_ingress_core::Message;
use reqwest::Client;
use reqwest::redirect::Policy;
use url::Url;

// ============================================================================
// SECTION: HTTP Forwarder
// ============================================================================

/// Default timeout applied to each outbound delivery attempt.
pub const DEFAULT_FORWARD_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP-backed message forwarder.
///
/// # Invariants
/// - The client never follows redirects.
/// - Requests are bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpForwarder {
    /// HTTP client used for delivery requests.
    client: Client,
}

impl HttpForwarder {
    /// Builds a forwarder with the default delivery timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::Client`] when the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, ForwardError> {
        Self::with_timeout(DEFAULT_FORWARD_TIMEOUT)
    }

    /// Builds a forwarder with a specific delivery timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::Client`] when the HTTP client cannot be
    /// constructed.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ForwardError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(timeout)
            .build()
            .map_err(|err| ForwardError::Client(err.to_string()))?;
        Ok(Self {
            client,
        })
    }

    /// Builds a forwarder around a preconfigured client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self {
            client,
        }
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    async fn forward(&self, message: &Message, destination: &Url) -> Result<(), ForwardError> {
        let mut request = self.client.post(destination.clone());
        for (name, value) in message.headers() {
            request = request.header(name, value);
        }
        let response = request
            .body(message.payload().to_vec())
            .send()
            .await
            .map_err(|err| ForwardError::Request(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
