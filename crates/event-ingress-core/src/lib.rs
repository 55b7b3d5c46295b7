// crates/event-ingress-core/src/lib.rs
// ============================================================================
// Module: Event Ingress Core Library
// Description: Decode-route-dispatch pipeline for the event ingress.
// Purpose: Classify inbound messages and orchestrate single-shot delivery.
// Dependencies: serde, serde_json, base64, url, thiserror, async-trait
// ============================================================================

//! ## Overview
//! Event Ingress Core holds the decision logic of the ingress: lenient
//! envelope decoding, source classification, destination resolution, and the
//! dispatch orchestrator that performs exactly one delivery attempt per
//! message. Transport concerns (HTTP receive and send) live behind the
//! [`MessageHandler`] and [`Forwarder`] seams.
//! Invariants:
//! - Decoding is total; malformed input degrades to an unknown source.
//! - Every dispatch performs at most one forward attempt.
//! - Every delivery failure is recorded through the audit sink.
//!
//! Security posture: message payloads are untrusted input and are never
//! interpreted beyond best-effort classification.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod dispatch;
pub mod envelope;
pub mod interfaces;
pub mod message;
pub mod route;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::AuditSink;
pub use audit::DispatchAuditEvent;
pub use audit::DispatchOutcome;
pub use audit::NoopAuditSink;
pub use audit::ReceivedAuditEvent;
pub use audit::StderrAuditSink;
pub use dispatch::IngressDispatcher;
pub use envelope::DecodeFallback;
pub use envelope::DecodeOutcome;
pub use envelope::EventEnvelope;
pub use envelope::EventRecord;
pub use envelope::EventSource;
pub use envelope::decode_payload;
pub use interfaces::DispatchError;
pub use interfaces::ForwardError;
pub use interfaces::Forwarder;
pub use interfaces::MessageHandler;
pub use message::Message;
pub use message::is_forwardable_header;
pub use route::ChannelRoutes;
