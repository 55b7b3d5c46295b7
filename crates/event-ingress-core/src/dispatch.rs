// crates/event-ingress-core/src/dispatch.rs
// ============================================================================
// Module: Dispatch Orchestrator
// Description: Decode-route-forward composition with failure reporting.
// Purpose: Perform exactly one delivery attempt per received message.
// Dependencies: async-trait, url
// ============================================================================

//! ## Overview
//! [`IngressDispatcher`] composes the pipeline: decode the payload, resolve
//! the destination, forward once, report the outcome. It is stateless and
//! reentrant; concurrent dispatches share only the immutable routes table
//! and the audit sink.
//! Invariants:
//! - At most one forward attempt per message; no retries.
//! - Every delivery failure is recorded exactly once and propagated.
//! - Decode failures never surface to the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;

use crate::audit::AuditSink;
use crate::audit::DispatchAuditEvent;
use crate::audit::DispatchOutcome;
use crate::audit::ReceivedAuditEvent;
use crate::envelope::decode_payload;
use crate::interfaces::DispatchError;
use crate::interfaces::Forwarder;
use crate::interfaces::MessageHandler;
use crate::message::Message;
use crate::route::ChannelRoutes;

// ============================================================================
// SECTION: Dispatcher
// ============================================================================

/// Orchestrates decode, resolution, and single-shot delivery.
///
/// # Invariants
/// - Holds no per-call mutable state; safe to share behind [`Arc`].
pub struct IngressDispatcher {
    /// Immutable routes table resolved at startup.
    routes: ChannelRoutes,
    /// Outbound delivery seam.
    forwarder: Arc<dyn Forwarder>,
    /// Sink for receipt and outcome events.
    audit: Arc<dyn AuditSink>,
}

impl IngressDispatcher {
    /// Builds a dispatcher from its collaborators.
    #[must_use]
    pub fn new(
        routes: ChannelRoutes,
        forwarder: Arc<dyn Forwarder>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            routes,
            forwarder,
            audit,
        }
    }

    /// Dispatches one message: decode, resolve, forward, report.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Forward`] when the single delivery attempt
    /// fails; the failure is recorded through the audit sink before it
    /// propagates.
    pub async fn dispatch(&self, message: &Message) -> Result<(), DispatchError> {
        let outcome = decode_payload(message.payload());
        self.audit.record_received(ReceivedAuditEvent::new(
            outcome.envelope.id.clone(),
            message.payload().len(),
        ));

        let source = outcome.source();
        let destination = self.routes.resolve(source);
        let fallbacks = outcome.fallbacks.iter().map(|fallback| fallback.as_str()).collect();

        match self.forwarder.forward(message, destination).await {
            Ok(()) => {
                self.audit.record_dispatch(DispatchAuditEvent {
                    event: "message_dispatched",
                    timestamp_ms: crate::audit::timestamp_ms(),
                    message_id: outcome.envelope.id,
                    source: source.as_str(),
                    event_type: outcome.record.event_type,
                    fallbacks,
                    destination: destination.to_string(),
                    outcome: DispatchOutcome::Ok,
                    error: None,
                });
                Ok(())
            }
            Err(err) => {
                let reason = err.to_string();
                self.audit.record_dispatch(DispatchAuditEvent {
                    event: "message_dispatched",
                    timestamp_ms: crate::audit::timestamp_ms(),
                    message_id: outcome.envelope.id,
                    source: source.as_str(),
                    event_type: outcome.record.event_type,
                    fallbacks,
                    destination: destination.to_string(),
                    outcome: DispatchOutcome::Error,
                    error: Some(reason.clone()),
                });
                Err(DispatchError::Forward {
                    destination: destination.to_string(),
                    reason,
                })
            }
        }
    }
}

#[async_trait]
impl MessageHandler for IngressDispatcher {
    async fn on_message(&self, message: &Message) -> Result<(), DispatchError> {
        self.dispatch(message).await
    }
}
