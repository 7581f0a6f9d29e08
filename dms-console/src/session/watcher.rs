//! Session Expiry Watcher
//!
//! Background task that polls the session store on a fixed interval and
//! forces re-authentication once the record's expiry has passed. Exactly
//! one watcher runs while the protected area is mounted; tearing the area
//! down cancels the timer so no callbacks leak past it.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::routing::registry::BASE_PATH;
use crate::shell::{Navigator, Notice};

use super::clock::Clock;
use super::store::SessionStore;

/// Default polling interval.
pub const WATCH_INTERVAL: Duration = Duration::from_secs(5);

/// Polls the store and invalidates expired sessions.
pub struct ExpiryWatcher {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    navigator: Arc<dyn Navigator>,
    interval: Duration,
}

impl ExpiryWatcher {
    pub fn new(
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            clock,
            navigator,
            interval: WATCH_INTERVAL,
        }
    }

    /// Override the polling interval (tests tick in milliseconds).
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Start the polling loop. The returned handle owns the timer; dropping
    /// or shutting it down cancels the loop.
    pub fn spawn(self) -> WatcherHandle {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => self.check_once(),
                }
            }
        });

        tracing::debug!(interval = ?interval, "Expiry watcher started");
        WatcherHandle {
            cancel,
            handle: Some(handle),
        }
    }

    /// One poll: clear and redirect when the record's expiry has passed.
    /// Records without an expiry, and ticks after the store was already
    /// cleared, are no-ops.
    fn check_once(&self) {
        let Some(record) = self.store.load() else {
            return;
        };
        if !record.is_expired(self.clock.now_ms()) {
            return;
        }

        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear expired session");
        }
        tracing::warn!(event = "session_expired", "Session expired, forcing re-login");
        self.navigator.notice(Notice::SessionExpired);
        self.navigator.redirect(BASE_PATH, true);
    }
}

/// Handle to a running watcher. Cancels the timer on drop.
pub struct WatcherHandle {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl WatcherHandle {
    /// Stop the timer without waiting for the loop to exit.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Cancel and wait for the loop to exit.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            match handle.await {
                Ok(()) => tracing::debug!("Expiry watcher stopped"),
                Err(e) if e.is_cancelled() => tracing::debug!("Expiry watcher cancelled"),
                Err(e) => tracing::error!(error = ?e, "Expiry watcher panicked"),
            }
        }
    }
}

impl Drop for WatcherHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
