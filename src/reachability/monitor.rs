//! Single-writer reachability monitor and its sampling handle.

use tokio::sync::watch;

use super::stream::ReachabilityStream;
use super::{ConnectionType, NetworkReachabilityStatus};

/// Publishes reachability updates to any number of sampling readers.
///
/// The monitor is the single writer of the underlying watch channel; the
/// embedding application owns one per process and feeds it from whatever
/// platform signal it has. Readers obtain a [`ReachabilityHandle`] and only
/// ever sample the latest value.
#[derive(Debug)]
pub struct ReachabilityMonitor {
    tx: watch::Sender<NetworkReachabilityStatus>,
}

impl ReachabilityMonitor {
    /// Creates a monitor with the initial status
    /// [`NetworkReachabilityStatus::Unknown`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_status(NetworkReachabilityStatus::Unknown)
    }

    /// Creates a monitor seeded with a known status.
    #[must_use]
    pub fn with_status(status: NetworkReachabilityStatus) -> Self {
        let (tx, _rx) = watch::channel(status);
        Self { tx }
    }

    /// Publishes a new status.
    ///
    /// Readers observe the update on their next sample; in-flight requests
    /// are not affected.
    pub fn publish(&self, status: NetworkReachabilityStatus) {
        // send_replace never fails even with zero receivers
        let _previous = self.tx.send_replace(status);
    }

    /// Returns a new sampling handle.
    #[must_use]
    pub fn handle(&self) -> ReachabilityHandle {
        ReachabilityHandle {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ReachabilityMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side of the reachability signal.
///
/// `current()` samples the latest published status without blocking. The
/// handle is cheap to clone and safe to share across concurrent calls.
#[derive(Debug, Clone)]
pub struct ReachabilityHandle {
    rx: watch::Receiver<NetworkReachabilityStatus>,
}

impl ReachabilityHandle {
    /// Returns a handle pinned to a fixed status, with no writer behind it.
    ///
    /// Useful for tests and for environments without a platform signal
    /// (command-line usage), where connectivity is assumed.
    #[must_use]
    pub fn fixed(status: NetworkReachabilityStatus) -> Self {
        let (_tx, rx) = watch::channel(status);
        Self { rx }
    }

    /// Returns a handle pinned to wired/Wi-Fi reachability.
    #[must_use]
    pub fn assume_reachable() -> Self {
        Self::fixed(NetworkReachabilityStatus::Reachable(
            ConnectionType::EthernetOrWifi,
        ))
    }

    /// Samples the latest published status.
    #[must_use]
    pub fn current(&self) -> NetworkReachabilityStatus {
        *self.rx.borrow()
    }

    /// Converts this handle into a stream of status values.
    ///
    /// The stream yields the current status first, then every subsequent
    /// update, and ends when the monitor is dropped.
    #[must_use]
    pub fn into_stream(self) -> ReachabilityStream {
        ReachabilityStream::new(self.rx)
    }
}
