// crates/event-ingress-config/src/config.rs
// ============================================================================
// Module: Ingress Configuration
// Description: Configuration loading and validation for the event ingress.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: event-ingress-core, thiserror, url
// ============================================================================

//! ## Overview
//! The ingress is configured entirely through environment variables: three
//! required channel endpoints plus an optional bind address. Loading goes
//! through an injectable lookup so tests stay deterministic without touching
//! the process environment. Every value is validated before the server
//! starts; there are no lazy lookups at dispatch time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::time::Duration;

use event_ingress_core::ChannelRoutes;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable naming the GitHub channel endpoint.
pub const GITHUB_CHANNEL_URL_ENV: &str = "GITHUB_CHANNEL_URL";
/// Environment variable naming the Freshbooks channel endpoint.
pub const FRESHBOOKS_CHANNEL_URL_ENV: &str = "FRESHBOOKS_CHANNEL_URL";
/// Environment variable naming the common fallback channel endpoint.
pub const COMMON_CHANNEL_URL_ENV: &str = "COMMON_CHANNEL_URL";
/// Environment variable overriding the listen address.
pub const INGRESS_BIND_ENV: &str = "INGRESS_BIND";

/// Default listen address when `INGRESS_BIND` is unset.
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
/// Maximum accepted length of a single endpoint value.
pub(crate) const MAX_ENDPOINT_BYTES: usize = 4096;
/// Default maximum inbound request body size in bytes.
pub(crate) const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
/// Default outbound delivery timeout in seconds.
pub(crate) const DEFAULT_FORWARD_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Every variant names the offending variable for startup diagnostics.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("required environment variable not defined '{0}'")]
    MissingVar(&'static str),
    /// An endpoint value exceeded the size limit.
    #[error("environment variable '{var}' exceeds {max_bytes} bytes")]
    ValueTooLong {
        /// Offending variable name.
        var: &'static str,
        /// Enforced upper bound in bytes.
        max_bytes: usize,
    },
    /// An endpoint value failed URL parsing.
    #[error("environment variable '{var}' is not a valid url: {reason}")]
    InvalidUrl {
        /// Offending variable name.
        var: &'static str,
        /// Parser error text.
        reason: String,
    },
    /// An endpoint URL used a scheme other than http or https.
    #[error("environment variable '{var}' uses unsupported scheme '{scheme}'")]
    UnsupportedScheme {
        /// Offending variable name.
        var: &'static str,
        /// Rejected scheme.
        scheme: String,
    },
    /// The bind address failed to parse.
    #[error("invalid bind address '{0}'")]
    InvalidBind(String),
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Server settings for the ingress endpoint.
///
/// # Invariants
/// - `bind` is a parsed socket address; binding may still fail at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address for the ingress HTTP server.
    pub bind: SocketAddr,
    /// Maximum accepted inbound request body size in bytes.
    pub max_body_bytes: usize,
    /// Timeout applied to each outbound delivery attempt.
    pub forward_timeout: Duration,
}

/// Complete, validated ingress configuration.
///
/// # Invariants
/// - `routes` holds three validated http(s) endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngressConfig {
    /// Channel endpoints for destination resolution.
    pub routes: ChannelRoutes,
    /// Ingress server settings.
    pub server: ServerConfig,
}

impl IngressConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or any
    /// value fails validation. This is a fatal startup condition.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Loads configuration from an override map (deterministic tests).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] under the same rules as [`Self::from_env`].
    pub fn from_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(&|key| overrides.get(key).cloned())
    }

    /// Loads configuration through the provided lookup.
    fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let github = required_endpoint(lookup, GITHUB_CHANNEL_URL_ENV)?;
        let freshbooks = required_endpoint(lookup, FRESHBOOKS_CHANNEL_URL_ENV)?;
        let common = required_endpoint(lookup, COMMON_CHANNEL_URL_ENV)?;
        let bind = parse_bind(lookup(INGRESS_BIND_ENV).as_deref().unwrap_or(DEFAULT_BIND))?;
        Ok(Self {
            routes: ChannelRoutes::new(github, freshbooks, common),
            server: ServerConfig {
                bind,
                max_body_bytes: DEFAULT_MAX_BODY_BYTES,
                forward_timeout: Duration::from_secs(DEFAULT_FORWARD_TIMEOUT_SECS),
            },
        })
    }

    /// Overrides the listen port, keeping the configured host.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.bind.set_port(port);
        self
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads and validates one required endpoint variable.
fn required_endpoint(
    lookup: &dyn Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Url, ConfigError> {
    let value = lookup(var).filter(|value| !value.trim().is_empty());
    let value = value.ok_or(ConfigError::MissingVar(var))?;
    if value.len() > MAX_ENDPOINT_BYTES {
        return Err(ConfigError::ValueTooLong {
            var,
            max_bytes: MAX_ENDPOINT_BYTES,
        });
    }
    let url = Url::parse(value.trim()).map_err(|err| ConfigError::InvalidUrl {
        var,
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::UnsupportedScheme {
            var,
            scheme: scheme.to_string(),
        }),
    }
}

/// Parses the listen address.
fn parse_bind(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidBind(raw.to_string()))
}
