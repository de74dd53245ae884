//! Reachability change stream.

use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::watch;
use tokio_stream::Stream;
use tokio_stream::wrappers::WatchStream;

use super::NetworkReachabilityStatus;

/// A stream of reachability status values.
///
/// Returned by [`super::ReachabilityHandle::into_stream`]. Yields the status
/// current at creation time, then every later update, then ends when the
/// owning [`super::ReachabilityMonitor`] is dropped.
pub struct ReachabilityStream {
    inner: WatchStream<NetworkReachabilityStatus>,
}

impl ReachabilityStream {
    pub(super) fn new(rx: watch::Receiver<NetworkReachabilityStatus>) -> Self {
        Self {
            inner: WatchStream::new(rx),
        }
    }
}

impl Stream for ReachabilityStream {
    type Item = NetworkReachabilityStatus;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

impl std::fmt::Debug for ReachabilityStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReachabilityStream").finish_non_exhaustive()
    }
}
