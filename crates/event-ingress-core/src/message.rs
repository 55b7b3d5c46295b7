// crates/event-ingress-core/src/message.rs
// ============================================================================
// Module: Ingress Message Model
// Description: Opaque message envelope received by the ingress.
// Purpose: Carry payload bytes and transport metadata through one dispatch.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A [`Message`] is the unit of work for the ingress: the raw body bytes of
//! one inbound request plus the transport headers worth forwarding. It is
//! immutable once constructed and consumed by exactly one dispatch call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

// ============================================================================
// SECTION: Header Policy
// ============================================================================

/// Header names forwarded verbatim to the destination.
const FORWARD_HEADER_NAMES: &[&str] = &["content-type"];

/// Header name prefixes forwarded to the destination.
///
/// Covers CloudEvents attribute headers (`ce-*`) and tracing/custom headers
/// (`x-*`); everything else is hop-local and dropped at the ingress boundary.
const FORWARD_HEADER_PREFIXES: &[&str] = &["ce-", "x-"];

/// Returns true when a header should survive the ingress boundary.
///
/// Matching is case-insensitive; callers normalize names to lowercase before
/// storing them on a [`Message`].
#[must_use]
pub fn is_forwardable_header(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    FORWARD_HEADER_NAMES.contains(&name.as_str())
        || FORWARD_HEADER_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

// ============================================================================
// SECTION: Message
// ============================================================================

/// Opaque message envelope handled by one dispatch call.
///
/// # Invariants
/// - Header names are lowercase and pass [`is_forwardable_header`].
/// - The payload is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Forwardable transport headers, keyed by lowercase name.
    headers: BTreeMap<String, String>,
    /// Raw body bytes of the inbound request.
    payload: Vec<u8>,
}

impl Message {
    /// Builds a message, filtering headers down to the forwardable set.
    #[must_use]
    pub fn new<I, K, V>(headers: I, payload: Vec<u8>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let headers = headers
            .into_iter()
            .filter(|(name, _)| is_forwardable_header(name.as_ref()))
            .map(|(name, value)| (name.as_ref().to_ascii_lowercase(), value.into()))
            .collect();
        Self {
            headers,
            payload,
        }
    }

    /// Returns the forwardable headers.
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Returns the raw payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns the declared content type when one was received.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(String::as_str)
    }
}

#[cfg(test)]
mod tests;
