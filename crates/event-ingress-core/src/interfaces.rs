// crates/event-ingress-core/src/interfaces.rs
// ============================================================================
// Module: Ingress Interfaces
// Description: Transport-agnostic seams for message handling and delivery.
// Purpose: Define the contract surfaces between ingress, core, and relay.
// Dependencies: async-trait, thiserror, url
// ============================================================================

//! ## Overview
//! Two seams separate the pipeline from its transport collaborators: the
//! ingress boundary hands each received message to a [`MessageHandler`], and
//! the orchestrator delivers through a [`Forwarder`]. Both are injected at
//! construction, replacing the callback wiring of earlier designs with
//! explicit interfaces.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::message::Message;

// ============================================================================
// SECTION: Forwarder
// ============================================================================

/// Errors produced by outbound delivery.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The delivery client could not be constructed.
    #[error("forward client error: {0}")]
    Client(String),
    /// The outbound request failed before a response arrived.
    #[error("forward request failed: {0}")]
    Request(String),
    /// The destination answered with a non-success status.
    #[error("destination rejected delivery with http status {status}")]
    Rejected {
        /// HTTP status code returned by the destination.
        status: u16,
    },
}

/// Delivers a message to a resolved destination.
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Performs one delivery attempt with default options and no reply-to.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError`] when delivery fails; the error is treated as
    /// an opaque, reportable failure by the caller.
    async fn forward(&self, message: &Message, destination: &Url) -> Result<(), ForwardError>;
}

// ============================================================================
// SECTION: Message Handler
// ============================================================================

/// Errors surfaced by a dispatch call.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The single delivery attempt failed.
    #[error("dispatch to {destination} failed: {reason}")]
    Forward {
        /// Destination endpoint that was attempted.
        destination: String,
        /// Underlying delivery error text.
        reason: String,
    },
}

/// Consumes messages produced by the ingress boundary.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Handles one received message.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the message could not be delivered;
    /// the ingress boundary reflects this in its HTTP response.
    async fn on_message(&self, message: &Message) -> Result<(), DispatchError>;
}
