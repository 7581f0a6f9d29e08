//! Console configuration

use std::time::Duration;

use crate::session::FileSessionStore;

/// Configuration for the console core.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Auth backend base URL (e.g. "http://localhost:8080")
    pub api_base_url: String,
    /// Directory holding the persisted session record
    pub work_dir: String,
    /// Session record file name inside `work_dir`
    pub session_file: String,
    /// Expiry watcher polling interval
    pub watcher_interval: Duration,
    /// Request timeout for auth backend calls, in seconds
    pub request_timeout: u64,
}

impl ConsoleConfig {
    /// Default watcher polling interval (5 seconds).
    pub const DEFAULT_WATCHER_INTERVAL: Duration = Duration::from_secs(5);

    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("DMS_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            work_dir: std::env::var("DMS_WORK_DIR").unwrap_or_else(|_| "/var/lib/dms/console".into()),
            session_file: std::env::var("DMS_SESSION_FILE")
                .unwrap_or_else(|_| "session.json".into()),
            watcher_interval: std::env::var("DMS_WATCHER_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(Self::DEFAULT_WATCHER_INTERVAL),
            request_timeout: std::env::var("DMS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    pub fn new(api_base_url: impl Into<String>, work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.api_base_url = api_base_url.into();
        config.work_dir = work_dir.into();
        config
    }

    /// Override the watcher polling interval (tests use millisecond ticks).
    pub fn with_watcher_interval(mut self, interval: Duration) -> Self {
        self.watcher_interval = interval;
        self
    }

    /// Override the request timeout
    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout = seconds;
        self
    }

    /// File-backed session store at the configured location.
    pub fn session_store(&self) -> FileSessionStore {
        FileSessionStore::new(self.work_dir.as_str(), &self.session_file)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
