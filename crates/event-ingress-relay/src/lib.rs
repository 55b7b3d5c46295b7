// crates/event-ingress-relay/src/lib.rs
// ============================================================================
// Module: Event Ingress Relay Library
// Description: HTTP implementation of the outbound forwarder seam.
// Purpose: Deliver received messages to resolved channel endpoints.
// Dependencies: event-ingress-core, reqwest, url
// ============================================================================

//! ## Overview
//! The relay crate provides [`HttpForwarder`], the production implementation
//! of [`event_ingress_core::Forwarder`]. Delivery fails closed: connection
//! errors, timeouts, and non-success status codes all surface as reportable
//! forward errors.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod forwarder;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use forwarder::DEFAULT_FORWARD_TIMEOUT;
pub use forwarder::HttpForwarder;
