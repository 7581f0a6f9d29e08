//! Route Guard
//!
//! Gate in front of the protected area. The decision is computed fresh on
//! every pass; nothing is cached across navigations.

use std::sync::Arc;

use shared::SessionRecord;

use crate::session::{Clock, SessionStore};
use crate::shell::Notice;

use super::registry::BASE_PATH;

/// Decision made on each entry into the protected area.
#[derive(Debug, Clone)]
pub enum GuardDecision {
    /// Render protected children with this session.
    Allow(SessionRecord),
    /// Leave the protected area.
    Redirect {
        to: String,
        /// Replace the current history entry so the abandoned page cannot
        /// be reached by back-navigation.
        replace: bool,
        notice: Option<Notice>,
    },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow(_))
    }
}

/// Session gate for the protected area.
pub struct RouteGuard {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl RouteGuard {
    pub fn new(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Check the persisted session.
    ///
    /// - absent or token-less record → redirect to the login entry
    /// - `expiryTime` already passed → clear the store, redirect with a
    ///   session-expired notice
    /// - otherwise → allow; a record without `expiryTime` never expires
    ///   here (the watcher owns continuous invalidation)
    pub fn check(&self) -> GuardDecision {
        let Some(record) = self.store.load() else {
            tracing::info!(event = "auth_missing", "No session record, redirecting to entry");
            return GuardDecision::Redirect {
                to: BASE_PATH.to_string(),
                replace: true,
                notice: None,
            };
        };

        if !record.is_authenticated() {
            tracing::info!(event = "auth_missing", "Session record has no token");
            return GuardDecision::Redirect {
                to: BASE_PATH.to_string(),
                replace: true,
                notice: None,
            };
        }

        if record.is_expired(self.clock.now_ms()) {
            // Clearing an already-cleared store is a no-op, so racing the
            // watcher here is harmless.
            if let Err(e) = self.store.clear() {
                tracing::warn!(error = %e, "Failed to clear expired session");
            }
            tracing::warn!(event = "session_expired", "Session expired, forcing re-login");
            return GuardDecision::Redirect {
                to: BASE_PATH.to_string(),
                replace: true,
                notice: Some(Notice::SessionExpired),
            };
        }

        GuardDecision::Allow(record)
    }
}
