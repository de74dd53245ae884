//! Tests for `ReachabilityMonitor` and `ReachabilityHandle`.

use tokio_stream::StreamExt;

use super::{ConnectionType, NetworkReachabilityStatus, ReachabilityMonitor};

#[test]
fn new_monitor_reports_unknown() {
    let monitor = ReachabilityMonitor::new();
    let handle = monitor.handle();

    assert_eq!(handle.current(), NetworkReachabilityStatus::Unknown);
}

#[test]
fn publish_updates_all_handles() {
    let monitor = ReachabilityMonitor::new();
    let first = monitor.handle();
    let second = first.clone();

    monitor.publish(NetworkReachabilityStatus::Reachable(
        ConnectionType::Cellular,
    ));

    assert_eq!(
        first.current(),
        NetworkReachabilityStatus::Reachable(ConnectionType::Cellular)
    );
    assert_eq!(second.current(), first.current());
}

#[test]
fn current_samples_latest_value_only() {
    let monitor = ReachabilityMonitor::new();
    let handle = monitor.handle();

    monitor.publish(NetworkReachabilityStatus::NotReachable);
    monitor.publish(NetworkReachabilityStatus::Reachable(
        ConnectionType::EthernetOrWifi,
    ));

    // Intermediate values are not observable through sampling
    assert_eq!(
        handle.current(),
        NetworkReachabilityStatus::Reachable(ConnectionType::EthernetOrWifi)
    );
}

#[test]
fn fixed_handle_never_changes() {
    let handle = super::ReachabilityHandle::fixed(NetworkReachabilityStatus::NotReachable);

    assert_eq!(handle.current(), NetworkReachabilityStatus::NotReachable);
}

#[test]
fn assume_reachable_reports_wifi() {
    let handle = super::ReachabilityHandle::assume_reachable();

    assert!(handle.current().is_reachable());
}

#[tokio::test]
async fn stream_yields_current_then_updates() {
    let monitor = ReachabilityMonitor::new();
    let mut stream = monitor.handle().into_stream();

    assert_eq!(
        stream.next().await,
        Some(NetworkReachabilityStatus::Unknown)
    );

    monitor.publish(NetworkReachabilityStatus::NotReachable);
    assert_eq!(
        stream.next().await,
        Some(NetworkReachabilityStatus::NotReachable)
    );

    drop(monitor);
    assert_eq!(stream.next().await, None);
}
