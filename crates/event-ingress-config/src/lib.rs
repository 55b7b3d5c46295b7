// crates/event-ingress-config/src/lib.rs
// ============================================================================
// Module: Event Ingress Config Library
// Description: Environment-sourced configuration for the event ingress.
// Purpose: Load and validate channel endpoints and server settings.
// Dependencies: event-ingress-core, thiserror, url
// ============================================================================

//! ## Overview
//! Configuration is read from the process environment and validated fail
//! closed: a missing or malformed required endpoint terminates startup with
//! a diagnostic rather than producing a partially routed ingress.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::COMMON_CHANNEL_URL_ENV;
pub use config::ConfigError;
pub use config::DEFAULT_BIND;
pub use config::FRESHBOOKS_CHANNEL_URL_ENV;
pub use config::GITHUB_CHANNEL_URL_ENV;
pub use config::INGRESS_BIND_ENV;
pub use config::IngressConfig;
pub use config::ServerConfig;
