// crates/event-ingress-core/src/route.rs
// ============================================================================
// Module: Destination Resolution
// Description: Static mapping from classified sources to channel endpoints.
// Purpose: Resolve a destination URL for every message, with a fallback.
// Dependencies: url
// ============================================================================

//! ## Overview
//! [`ChannelRoutes`] holds the three configured channel endpoints and maps a
//! classified [`EventSource`] onto one of them. Resolution is total: unknown
//! sources land on the common channel. The routes struct is built once from
//! validated configuration and injected into the dispatcher; there is no
//! process-global endpoint state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use url::Url;

use crate::envelope::EventSource;

// ============================================================================
// SECTION: Channel Routes
// ============================================================================

/// Configured channel endpoints for destination resolution.
///
/// # Invariants
/// - Endpoints are validated URLs; the resolver never fails.
/// - Identical sources always resolve to identical destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRoutes {
    /// Endpoint for events classified as GitHub.
    github: Url,
    /// Endpoint for events classified as Freshbooks.
    freshbooks: Url,
    /// Fallback endpoint for every other source.
    common: Url,
}

impl ChannelRoutes {
    /// Builds a routes table from validated endpoints.
    #[must_use]
    pub const fn new(github: Url, freshbooks: Url, common: Url) -> Self {
        Self {
            github,
            freshbooks,
            common,
        }
    }

    /// Resolves the destination endpoint for a classified source.
    #[must_use]
    pub const fn resolve(&self, source: EventSource) -> &Url {
        match source {
            EventSource::Github => &self.github,
            EventSource::Freshbooks => &self.freshbooks,
            EventSource::Other => &self.common,
        }
    }

    /// Returns the common fallback endpoint.
    #[must_use]
    pub const fn common(&self) -> &Url {
        &self.common
    }
}

#[cfg(test)]
mod tests;
