//! Reachability layer reporting current network connectivity.
//!
//! This module provides types for:
//! - Representing connectivity state ([`NetworkReachabilityStatus`], [`ConnectionType`])
//! - Publishing status updates from a single writer ([`ReachabilityMonitor`])
//! - Sampling the latest status without blocking ([`ReachabilityHandle`])
//! - Observing status changes as a stream ([`ReachabilityStream`])
//!
//! The REST client samples a [`ReachabilityHandle`] before every dispatch;
//! it never waits for connectivity. The platform side (the embedding
//! application) owns the [`ReachabilityMonitor`] and pushes updates as the
//! OS reports them.

mod monitor;
mod status;
mod stream;

#[cfg(test)]
mod monitor_tests;

pub use monitor::{ReachabilityHandle, ReachabilityMonitor};
pub use status::{ConnectionType, NetworkReachabilityStatus};
pub use stream::ReachabilityStream;
