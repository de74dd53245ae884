//! Connectivity status types.

use std::fmt;

/// Transport class of a reachable network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionType {
    /// Wi-Fi or wired connectivity.
    EthernetOrWifi,
    /// Cellular data connectivity.
    Cellular,
}

/// Current network reachability, as reported by the platform.
///
/// `Unknown` is the initial state before the platform has reported anything.
/// The REST client treats `Unknown` as dispatchable: only an affirmative
/// `NotReachable` short-circuits a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkReachabilityStatus {
    /// No report received yet.
    #[default]
    Unknown,
    /// The network is known to be unreachable.
    NotReachable,
    /// The network is reachable over the given transport class.
    Reachable(ConnectionType),
}

impl NetworkReachabilityStatus {
    /// Returns true if the status affirmatively reports no connectivity.
    #[must_use]
    pub const fn is_not_reachable(self) -> bool {
        matches!(self, Self::NotReachable)
    }

    /// Returns true if the status affirmatively reports connectivity.
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Reachable(_))
    }
}

impl fmt::Display for NetworkReachabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::NotReachable => f.write_str("not reachable"),
            Self::Reachable(ConnectionType::EthernetOrWifi) => f.write_str("reachable (wifi)"),
            Self::Reachable(ConnectionType::Cellular) => f.write_str("reachable (cellular)"),
        }
    }
}
