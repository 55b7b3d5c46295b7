// crates/event-ingress-core/src/route/tests.rs
// ============================================================================
// Module: Destination Resolution Tests
// Description: Unit tests for the source-to-endpoint mapping.
// ============================================================================

//! ## Overview
//! Validates the static source mapping, the fallback rule, and resolver
//! idempotence.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

use url::Url;

use super::ChannelRoutes;
use crate::envelope::EventSource;

/// Builds a routes table with distinct, recognizable endpoints.
fn sample_routes() -> ChannelRoutes {
    ChannelRoutes::new(
        Url::parse("http://github-channel.default.svc/").unwrap(),
        Url::parse("http://freshbooks-channel.default.svc/").unwrap(),
        Url::parse("http://common-channel.default.svc/").unwrap(),
    )
}

#[test]
fn github_resolves_to_github_endpoint() {
    let routes = sample_routes();
    assert_eq!(routes.resolve(EventSource::Github).as_str(), "http://github-channel.default.svc/");
}

#[test]
fn freshbooks_resolves_to_freshbooks_endpoint() {
    let routes = sample_routes();
    assert_eq!(
        routes.resolve(EventSource::Freshbooks).as_str(),
        "http://freshbooks-channel.default.svc/"
    );
}

#[test]
fn other_resolves_to_common_endpoint() {
    let routes = sample_routes();
    assert_eq!(routes.resolve(EventSource::Other).as_str(), "http://common-channel.default.svc/");
    assert_eq!(routes.resolve(EventSource::Other), routes.common());
}

#[test]
fn resolution_is_idempotent() {
    let routes = sample_routes();
    for source in [EventSource::Github, EventSource::Freshbooks, EventSource::Other] {
        assert_eq!(routes.resolve(source), routes.resolve(source));
    }
}
