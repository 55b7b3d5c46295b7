// crates/event-ingress-core/src/audit.rs
// ============================================================================
// Module: Dispatch Audit Events
// Description: Structured audit events for message receipt and dispatch.
// Purpose: Surface dispatch outcomes without hard logging dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines audit event payloads and sinks for the dispatch
//! pipeline. It is intentionally dependency-light so deployments can route
//! events to their preferred logging pipeline without redesign. Payload
//! bytes are never logged; events carry the envelope id and sizes only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Labels
// ============================================================================

/// Dispatch outcome classification.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// The delivery attempt succeeded.
    Ok,
    /// The delivery attempt failed.
    Error,
}

impl DispatchOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

// ============================================================================
// SECTION: Events
// ============================================================================

/// Audit event emitted when a message is received.
#[derive(Debug, Clone, Serialize)]
pub struct ReceivedAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Envelope id when one was decoded (empty otherwise).
    pub message_id: String,
    /// Size of the received payload in bytes.
    pub payload_bytes: usize,
}

impl ReceivedAuditEvent {
    /// Builds a receipt event stamped with the current time.
    #[must_use]
    pub fn new(message_id: String, payload_bytes: usize) -> Self {
        Self {
            event: "message_received",
            timestamp_ms: timestamp_ms(),
            message_id,
            payload_bytes,
        }
    }
}

/// Audit event emitted after the single delivery attempt.
///
/// # Invariants
/// - `error` is `Some` exactly when `outcome` is [`DispatchOutcome::Error`].
#[derive(Debug, Clone, Serialize)]
pub struct DispatchAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Envelope id when one was decoded (empty otherwise).
    pub message_id: String,
    /// Classified source label.
    pub source: &'static str,
    /// Raw event type from the inner record (empty when absent).
    pub event_type: String,
    /// Lenient decode branches that fired, in order.
    pub fallbacks: Vec<&'static str>,
    /// Destination endpoint that was attempted.
    pub destination: String,
    /// Delivery outcome.
    pub outcome: DispatchOutcome,
    /// Delivery error text when the attempt failed.
    pub error: Option<String>,
}

/// Returns milliseconds since the Unix epoch, or zero before it.
pub(crate) fn timestamp_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_millis())
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for dispatch pipeline events.
pub trait AuditSink: Send + Sync {
    /// Records a message receipt event.
    fn record_received(&self, event: ReceivedAuditEvent);
    /// Records a dispatch outcome event.
    fn record_dispatch(&self, event: DispatchAuditEvent);
}

/// Audit sink that writes JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record_received(&self, event: ReceivedAuditEvent) {
        if let Ok(payload) = serde_json::to_string(&event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }

    fn record_dispatch(&self, event: DispatchAuditEvent) {
        if let Ok(payload) = serde_json::to_string(&event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// No-op audit sink.
///
/// # Invariants
/// - Events are intentionally discarded.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record_received(&self, _event: ReceivedAuditEvent) {}

    fn record_dispatch(&self, _event: DispatchAuditEvent) {}
}
