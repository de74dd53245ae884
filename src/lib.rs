//! cotton-net: Cotton browser networking core
//!
//! The networking core of the Cotton browser as a standalone library:
//! DNS-over-HTTPS resolution, search-suggestion autocomplete, TLS trust
//! evaluation with wildcard-host fallback, and a reachability-gated REST
//! client exposed under three concurrency idioms.

pub mod client;
pub mod config;
pub mod dns;
pub mod host;
pub mod reachability;
pub mod suggest;
pub mod time;
pub mod trust;
