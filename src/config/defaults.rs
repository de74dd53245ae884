//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default per-call timeout in seconds.
pub const TIMEOUT_SECS: u64 = 8;

/// Maximum accepted per-call timeout in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Default DNS-over-HTTPS server host.
pub const DOH_HOST: &str = crate::dns::GOOGLE_DNS_HOST;

/// Default per-call timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
