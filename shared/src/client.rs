//! Auth backend payloads
//!
//! Request/response types exchanged with the REST auth backend. A
//! successful login or OTP verification returns the session record shape
//! (`shared::SessionRecord`), which the console persists verbatim.

use serde::{Deserialize, Serialize};

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// OTP verification request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerifyRequest {
    pub phone: String,
    pub otp_code: String,
}

/// Registration request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Password reset initiation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// New password submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPasswordRequest {
    pub reset_token: String,
    pub password: String,
}

/// API response envelope used by the backend.
///
/// ```json
/// { "code": "E0000", "message": "Success", "data": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub const SUCCESS_CODE: &'static str = "E0000";

    pub fn is_success(&self) -> bool {
        self.code == Self::SUCCESS_CODE
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
