// crates/event-ingress-core/src/message/tests.rs
// ============================================================================
// Module: Message Model Tests
// Description: Unit tests for message construction and header filtering.
// ============================================================================

//! ## Overview
//! Validates the ingress header allowlist and message accessors.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

use super::Message;
use super::is_forwardable_header;

#[test]
fn content_type_is_forwardable() {
    assert!(is_forwardable_header("content-type"));
    assert!(is_forwardable_header("Content-Type"));
}

#[test]
fn cloudevents_and_custom_prefixes_are_forwardable() {
    assert!(is_forwardable_header("ce-source"));
    assert!(is_forwardable_header("Ce-Id"));
    assert!(is_forwardable_header("x-request-id"));
    assert!(is_forwardable_header("X-B3-TraceId"));
}

#[test]
fn hop_local_headers_are_dropped() {
    assert!(!is_forwardable_header("host"));
    assert!(!is_forwardable_header("authorization"));
    assert!(!is_forwardable_header("content-length"));
    assert!(!is_forwardable_header("connection"));
}

#[test]
fn new_filters_and_lowercases_headers() {
    let message = Message::new(
        [
            ("Content-Type", "application/json"),
            ("Host", "ingress.local"),
            ("X-Request-Id", "abc"),
        ],
        b"body".to_vec(),
    );

    assert_eq!(message.headers().len(), 2);
    assert_eq!(message.content_type(), Some("application/json"));
    assert_eq!(message.headers().get("x-request-id").map(String::as_str), Some("abc"));
    assert!(!message.headers().contains_key("host"));
    assert_eq!(message.payload(), b"body");
}

#[test]
fn content_type_absent_when_not_received() {
    let message = Message::new([("x-request-id", "abc")], Vec::new());
    assert_eq!(message.content_type(), None);
}
