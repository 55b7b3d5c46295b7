// crates/event-ingress-core/src/envelope.rs
// ============================================================================
// Module: Envelope Decoding
// Description: Lenient decoding of the nested event payload.
// Purpose: Classify message payloads without ever rejecting them.
// Dependencies: serde, serde_json, base64
// ============================================================================

//! ## Overview
//! Inbound bodies carry an outer JSON envelope (`id` + base64 `data`) whose
//! decoded bytes form an inner record (`source` + `type`). Decoding is
//! deliberately lenient as a matter of policy, not accident: every failure
//! degrades to zero values so the message can still be delivered to the
//! fallback channel. Each absorbed failure is an explicit, tagged branch
//! ([`DecodeFallback`]) so the lenient traffic stays observable and each
//! branch stays independently testable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

// ============================================================================
// SECTION: Wire Shapes
// ============================================================================

/// Outer JSON wrapper carried by inbound message bodies.
///
/// # Invariants
/// - Missing fields deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventEnvelope {
    /// Opaque event identifier.
    #[serde(default)]
    pub id: String,
    /// Base64-encoded inner record.
    #[serde(default)]
    pub data: String,
}

/// Inner classification record decoded from the envelope `data` field.
///
/// # Invariants
/// - Missing fields deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventRecord {
    /// Logical source label (for example `GITHUB`).
    #[serde(default)]
    pub source: String,
    /// Event type label; carried through to audit events, unused by routing.
    #[serde(default, rename = "type")]
    pub event_type: String,
}

// ============================================================================
// SECTION: Source Classification
// ============================================================================

/// Classified origin of an event record.
///
/// # Invariants
/// - Classification is an exact, case-sensitive match on the source label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    /// The record named the GitHub source.
    Github,
    /// The record named the Freshbooks source.
    Freshbooks,
    /// Any other label, including empty.
    Other,
}

impl EventSource {
    /// Classifies a raw source label.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        match raw {
            "GITHUB" => Self::Github,
            "FRESHBOOKS" => Self::Freshbooks,
            _ => Self::Other,
        }
    }

    /// Returns a stable label for audit events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Freshbooks => "freshbooks",
            Self::Other => "other",
        }
    }
}

// ============================================================================
// SECTION: Decode Outcome
// ============================================================================

/// Lenient branch that fired during decoding.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFallback {
    /// Outer envelope bytes were not valid JSON.
    EnvelopeJson,
    /// Envelope `data` was not valid base64.
    Base64,
    /// Decoded bytes were not a valid record.
    RecordJson,
}

impl DecodeFallback {
    /// Returns a stable label for audit events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnvelopeJson => "envelope_json",
            Self::Base64 => "base64",
            Self::RecordJson => "record_json",
        }
    }
}

/// Result of decoding one message payload.
///
/// # Invariants
/// - `fallbacks` lists the lenient branches in the order they fired.
/// - Decoding never fails; zero values stand in for unreadable input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Parsed outer envelope (zero-valued when unreadable).
    pub envelope: EventEnvelope,
    /// Parsed inner record (zero-valued when unreadable).
    pub record: EventRecord,
    /// Lenient branches that fired during decoding.
    pub fallbacks: Vec<DecodeFallback>,
}

impl DecodeOutcome {
    /// Classifies the decoded record's source label.
    #[must_use]
    pub fn source(&self) -> EventSource {
        EventSource::classify(&self.record.source)
    }
}

// ============================================================================
// SECTION: Decoder
// ============================================================================

/// Decodes a raw message body into an event record, never failing.
///
/// Three lenient steps: parse the outer envelope, base64-decode `data`,
/// parse the inner record. Each step degrades to zero values on failure and
/// tags the outcome. An empty `data` field skips the inner parse entirely;
/// there is nothing to read and no branch fired.
#[must_use]
pub fn decode_payload(body: &[u8]) -> DecodeOutcome {
    let mut fallbacks = Vec::new();

    let envelope = match serde_json::from_slice::<EventEnvelope>(body) {
        Ok(envelope) => envelope,
        Err(_) => {
            fallbacks.push(DecodeFallback::EnvelopeJson);
            EventEnvelope::default()
        }
    };

    let decoded = match BASE64.decode(envelope.data.as_bytes()) {
        Ok(decoded) => decoded,
        Err(_) => {
            fallbacks.push(DecodeFallback::Base64);
            Vec::new()
        }
    };

    let record = if decoded.is_empty() {
        EventRecord::default()
    } else {
        match serde_json::from_slice::<EventRecord>(&decoded) {
            Ok(record) => record,
            Err(_) => {
                fallbacks.push(DecodeFallback::RecordJson);
                EventRecord::default()
            }
        }
    };

    DecodeOutcome {
        envelope,
        record,
        fallbacks,
    }
}

#[cfg(test)]
mod tests;
