// crates/event-ingress-server/src/lib.rs
// ============================================================================
// Module: Event Ingress Server Library
// Description: HTTP ingress boundary for the event ingress.
// Purpose: Adapt inbound requests into messages and reflect dispatch results.
// Dependencies: event-ingress-core, axum, tokio
// ============================================================================

//! ## Overview
//! The server crate hosts the ingress endpoint: an axum application that
//! accepts POST requests on any path, adapts each request into a core
//! [`event_ingress_core::Message`], hands it to the injected
//! [`event_ingress_core::MessageHandler`], and maps the dispatch result onto
//! the HTTP response status.
//!
//! Security posture: request bodies are untrusted and size-capped before any
//! decoding happens.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod server;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use server::IngressServer;
pub use server::ServerError;
