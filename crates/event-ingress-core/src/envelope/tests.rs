// crates/event-ingress-core/src/envelope/tests.rs
// ============================================================================
// Module: Envelope Decoding Tests
// Description: Unit tests for lenient decoding and source classification.
// ============================================================================

//! ## Overview
//! Exercises each lenient decode branch independently plus the exact,
//! case-sensitive source classification.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use super::DecodeFallback;
use super::EventRecord;
use super::EventSource;
use super::decode_payload;

/// Builds an envelope body whose `data` field encodes the given record JSON.
fn envelope_with_record(id: &str, record_json: &str) -> Vec<u8> {
    let data = BASE64.encode(record_json.as_bytes());
    format!(r#"{{"id":"{id}","data":"{data}"}}"#).into_bytes()
}

// ============================================================================
// SECTION: Well-Formed Input
// ============================================================================

#[test]
fn decodes_well_formed_github_event() {
    let body = envelope_with_record("1", r#"{"source":"GITHUB","type":"push"}"#);
    let outcome = decode_payload(&body);

    assert_eq!(outcome.envelope.id, "1");
    assert_eq!(
        outcome.record,
        EventRecord {
            source: "GITHUB".to_string(),
            event_type: "push".to_string(),
        }
    );
    assert_eq!(outcome.source(), EventSource::Github);
    assert!(outcome.fallbacks.is_empty());
}

#[test]
fn decodes_record_with_missing_type_field() {
    let body = envelope_with_record("3", r#"{"source":"UNKNOWN"}"#);
    let outcome = decode_payload(&body);

    assert_eq!(outcome.record.source, "UNKNOWN");
    assert_eq!(outcome.record.event_type, "");
    assert_eq!(outcome.source(), EventSource::Other);
    assert!(outcome.fallbacks.is_empty());
}

// ============================================================================
// SECTION: Lenient Branches
// ============================================================================

#[test]
fn malformed_envelope_degrades_to_unknown_source() {
    let outcome = decode_payload(b"not json at all");

    assert_eq!(outcome.envelope.id, "");
    assert_eq!(outcome.source(), EventSource::Other);
    assert_eq!(outcome.fallbacks, vec![DecodeFallback::EnvelopeJson]);
}

#[test]
fn invalid_base64_degrades_to_unknown_source() {
    let body = br#"{"id":"2","data":"%%% not base64 %%%"}"#;
    let outcome = decode_payload(body);

    assert_eq!(outcome.envelope.id, "2");
    assert_eq!(outcome.source(), EventSource::Other);
    assert_eq!(outcome.fallbacks, vec![DecodeFallback::Base64]);
}

#[test]
fn malformed_inner_record_degrades_to_unknown_source() {
    let data = BASE64.encode(b"{broken");
    let body = format!(r#"{{"id":"4","data":"{data}"}}"#);
    let outcome = decode_payload(body.as_bytes());

    assert_eq!(outcome.source(), EventSource::Other);
    assert_eq!(outcome.fallbacks, vec![DecodeFallback::RecordJson]);
}

#[test]
fn empty_data_field_skips_inner_parse() {
    let body = br#"{"id":"5","data":""}"#;
    let outcome = decode_payload(body);

    assert_eq!(outcome.record, EventRecord::default());
    assert!(outcome.fallbacks.is_empty());
}

#[test]
fn missing_fields_deserialize_to_empty_values() {
    let outcome = decode_payload(b"{}");

    assert_eq!(outcome.envelope.id, "");
    assert_eq!(outcome.envelope.data, "");
    assert_eq!(outcome.source(), EventSource::Other);
    assert!(outcome.fallbacks.is_empty());
}

// ============================================================================
// SECTION: Classification
// ============================================================================

#[test]
fn classification_is_exact_and_case_sensitive() {
    assert_eq!(EventSource::classify("GITHUB"), EventSource::Github);
    assert_eq!(EventSource::classify("FRESHBOOKS"), EventSource::Freshbooks);
    assert_eq!(EventSource::classify("github"), EventSource::Other);
    assert_eq!(EventSource::classify("GitHub"), EventSource::Other);
    assert_eq!(EventSource::classify(""), EventSource::Other);
    assert_eq!(EventSource::classify("GITLAB"), EventSource::Other);
}

#[test]
fn source_labels_are_stable() {
    assert_eq!(EventSource::Github.as_str(), "github");
    assert_eq!(EventSource::Freshbooks.as_str(), "freshbooks");
    assert_eq!(EventSource::Other.as_str(), "other");
}
