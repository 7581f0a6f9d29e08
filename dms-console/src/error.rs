//! Console error types

use thiserror::Error;

/// Console error type
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// No valid session is present
    #[error("Authentication required")]
    Unauthorized,

    /// The session's expiry time has passed
    #[error("Session expired, please login again")]
    SessionExpired,

    /// A capability check failed for a protected action
    #[error("Permission denied: missing '{capability}' on module '{module}'")]
    PermissionDenied { module: String, capability: String },

    /// The auth backend rejected the credentials
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The auth backend reported a server-side failure
    #[error("Backend error: {0}")]
    Backend(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session storage I/O failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result type for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;
