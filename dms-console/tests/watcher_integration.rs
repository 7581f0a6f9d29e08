// dms-console/tests/watcher_integration.rs
// Expiry watcher lifecycle tests

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{RecordingNavigator, admin_record};
use dms_console::{
    ConsoleConfig, ConsoleShell, ExpiryWatcher, ManualClock, MemorySessionStore, Notice,
    SessionStore,
};

const NOW: i64 = 1_700_000_000_000;
const TICK: Duration = Duration::from_millis(10);

/// Long enough for several ticks at the test interval.
const SETTLE: Duration = Duration::from_millis(80);

fn watcher_over(
    store: &Arc<MemorySessionStore>,
    clock: &Arc<ManualClock>,
    navigator: &Arc<RecordingNavigator>,
) -> ExpiryWatcher {
    ExpiryWatcher::new(store.clone(), clock.clone(), navigator.clone()).with_interval(TICK)
}

#[tokio::test]
async fn watcher_invalidates_expired_session() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&admin_record("t1", Some(NOW - 1000))).unwrap();
    let clock = Arc::new(ManualClock::new(NOW));
    let navigator = RecordingNavigator::new();

    let handle = watcher_over(&store, &clock, &navigator).spawn();
    tokio::time::sleep(SETTLE).await;

    assert!(store.load().is_none());
    assert_eq!(navigator.notices(), vec![Notice::SessionExpired]);
    let redirect = navigator.last_redirect().unwrap();
    assert_eq!(redirect.path, "/dms");
    assert!(redirect.replace);

    handle.shutdown().await;
}

#[tokio::test]
async fn watcher_invalidation_fires_once() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&admin_record("t1", Some(NOW - 1000))).unwrap();
    let clock = Arc::new(ManualClock::new(NOW));
    let navigator = RecordingNavigator::new();

    let handle = watcher_over(&store, &clock, &navigator).spawn();
    // Many ticks pass; once the store is cleared the remaining ticks are
    // no-ops, not repeated redirects.
    tokio::time::sleep(SETTLE).await;

    assert_eq!(navigator.redirect_count(), 1);
    assert_eq!(navigator.notice_count(), 1);

    handle.shutdown().await;
}

#[tokio::test]
async fn watcher_leaves_live_sessions_alone() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&admin_record("t1", Some(NOW + 60_000))).unwrap();
    let clock = Arc::new(ManualClock::new(NOW));
    let navigator = RecordingNavigator::new();

    let handle = watcher_over(&store, &clock, &navigator).spawn();
    tokio::time::sleep(SETTLE).await;

    assert!(store.load().is_some());
    assert_eq!(navigator.redirect_count(), 0);

    handle.shutdown().await;
}

#[tokio::test]
async fn watcher_ignores_records_without_expiry() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&admin_record("t1", None)).unwrap();
    let clock = Arc::new(ManualClock::new(i64::MAX));
    let navigator = RecordingNavigator::new();

    let handle = watcher_over(&store, &clock, &navigator).spawn();
    tokio::time::sleep(SETTLE).await;

    assert!(store.load().is_some());
    assert_eq!(navigator.redirect_count(), 0);

    handle.shutdown().await;
}

#[tokio::test]
async fn no_callbacks_after_teardown() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&admin_record("t1", Some(NOW + 60_000))).unwrap();
    let clock = Arc::new(ManualClock::new(NOW));
    let navigator = RecordingNavigator::new();

    let handle = watcher_over(&store, &clock, &navigator).spawn();
    tokio::time::sleep(SETTLE).await;
    handle.shutdown().await;

    // The session expires only after teardown. A leaked timer would clear
    // the store and redirect within a tick; nothing may happen.
    clock.advance(120_000);
    tokio::time::sleep(SETTLE).await;

    assert!(store.load().is_some());
    assert_eq!(navigator.redirect_count(), 0);
    assert_eq!(navigator.notice_count(), 0);
}

#[tokio::test]
async fn dropping_the_handle_cancels_the_timer() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&admin_record("t1", Some(NOW + 60_000))).unwrap();
    let clock = Arc::new(ManualClock::new(NOW));
    let navigator = RecordingNavigator::new();

    let handle = watcher_over(&store, &clock, &navigator).spawn();
    drop(handle);

    clock.advance(120_000);
    tokio::time::sleep(SETTLE).await;

    assert!(store.load().is_some());
    assert_eq!(navigator.redirect_count(), 0);
}

#[tokio::test]
async fn shell_owns_the_watcher_lifecycle() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&admin_record("t1", Some(NOW + 60_000))).unwrap();
    let clock = Arc::new(ManualClock::new(NOW));
    let navigator = RecordingNavigator::new();

    let config = ConsoleConfig::new("http://localhost:8080", "/tmp/dms-test")
        .with_watcher_interval(TICK);
    let mut shell = ConsoleShell::new(config, store.clone(), clock.clone(), navigator.clone());

    assert!(shell.enter().is_some());
    assert!(shell.watcher_active());

    // Re-entering does not stack a second watcher
    assert!(shell.enter().is_some());
    assert!(shell.watcher_active());

    shell.teardown().await;
    assert!(!shell.watcher_active());

    clock.advance(120_000);
    tokio::time::sleep(SETTLE).await;
    assert!(store.load().is_some());
    assert_eq!(navigator.redirect_count(), 0);
}
