//! Console shell orchestration
//!
//! The seam between the core and the UI shell that hosts it. The core
//! never touches the UI directly: redirects and user-visible notices are
//! emitted through [`Navigator`], and [`ConsoleShell`] drives the guard,
//! route generation, and the expiry watcher's lifecycle.

use std::fmt;
use std::sync::Arc;

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::routing::generator::{self, RouteEntry};
use crate::routing::guard::{GuardDecision, RouteGuard};
use crate::session::{Clock, ExpiryWatcher, SessionStore, WatcherHandle};

/// User-visible notice emitted by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SessionExpired,
    PermissionDenied { module: String, capability: String },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::SessionExpired => "Your session has expired, please login again".to_string(),
            Notice::PermissionDenied { module, capability } => {
                format!("You do not have '{capability}' permission on '{module}'")
            }
        }
    }

    /// Notice for errors that must be surfaced to the user instead of
    /// failing silently. Transport and storage errors carry no notice.
    pub fn from_error(err: &ConsoleError) -> Option<Notice> {
        match err {
            ConsoleError::SessionExpired => Some(Notice::SessionExpired),
            ConsoleError::PermissionDenied { module, capability } => {
                Some(Notice::PermissionDenied {
                    module: module.clone(),
                    capability: capability.clone(),
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Navigation and notice surface implemented by the hosting shell.
pub trait Navigator: Send + Sync {
    /// Navigate to `path`. With `replace`, the current history entry is
    /// replaced so the abandoned page cannot be reached by going back.
    fn redirect(&self, path: &str, replace: bool);

    /// Surface a user-visible notice.
    fn notice(&self, notice: Notice);
}

/// Drives the protected area: guard on entry, route set computation,
/// watcher lifecycle, and re-validation on navigation.
pub struct ConsoleShell {
    config: ConsoleConfig,
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    navigator: Arc<dyn Navigator>,
    watcher: Option<WatcherHandle>,
}

impl ConsoleShell {
    pub fn new(
        config: ConsoleConfig,
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            store,
            clock,
            navigator,
            watcher: None,
        }
    }

    /// Fresh guard over the shell's store and clock.
    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.store.clone(), self.clock.clone())
    }

    /// Enter the protected area.
    ///
    /// Runs the guard; on success starts the expiry watcher (one instance
    /// at a time) and returns the session's route set. On failure emits the
    /// redirect (and notice, if any) and returns `None`.
    pub fn enter(&mut self) -> Option<Vec<RouteEntry>> {
        match self.guard().check() {
            GuardDecision::Allow(record) => {
                self.start_watcher();
                Some(generator::generate(&record))
            }
            GuardDecision::Redirect {
                to,
                replace,
                notice,
            } => {
                if let Some(notice) = notice {
                    self.navigator.notice(notice);
                }
                self.navigator.redirect(&to, replace);
                None
            }
        }
    }

    /// Landing target for the base path under the current session, when
    /// one is present.
    pub fn landing(&self) -> Option<String> {
        self.store.load().map(|record| generator::default_landing(&record))
    }

    /// Navigate inside the protected area.
    ///
    /// Session validity is re-checked first: a page whose request completed
    /// after the session expired must not navigate on that success. Returns
    /// whether the navigation went through.
    pub fn navigate(&mut self, path: &str) -> bool {
        match self.guard().check() {
            GuardDecision::Allow(_) => {
                self.navigator.redirect(path, false);
                true
            }
            GuardDecision::Redirect {
                to,
                replace,
                notice,
            } => {
                if let Some(notice) = notice {
                    self.navigator.notice(notice);
                }
                self.navigator.redirect(&to, replace);
                false
            }
        }
    }

    fn start_watcher(&mut self) {
        if self.watcher.as_ref().is_some_and(|w| !w.is_finished()) {
            return;
        }
        let watcher = ExpiryWatcher::new(
            self.store.clone(),
            self.clock.clone(),
            self.navigator.clone(),
        )
        .with_interval(self.config.watcher_interval);
        self.watcher = Some(watcher.spawn());
    }

    /// Whether the watcher is currently running.
    pub fn watcher_active(&self) -> bool {
        self.watcher.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Tear down the protected area, cancelling the watcher timer.
    pub async fn teardown(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.shutdown().await;
        }
    }
}
