//! Auth backend client
//!
//! Network calls to the REST auth backend and the login/logout flow that
//! feeds the session store. The backend is a trait so tests and offline
//! shells can substitute a stub transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::client::{
    LoginRequest, NewPasswordRequest, OtpVerifyRequest, PasswordResetRequest, RegisterRequest,
};
use shared::{ApiResponse, SessionRecord};

use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, ConsoleResult};
use crate::session::SessionStore;

/// Authentication backend interface.
///
/// Login and OTP verification yield the session record shape; the caller
/// persists it verbatim.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, req: &LoginRequest) -> ConsoleResult<SessionRecord>;
    async fn verify_otp(&self, req: &OtpVerifyRequest) -> ConsoleResult<SessionRecord>;
    async fn register(&self, req: &RegisterRequest) -> ConsoleResult<()>;
    async fn request_password_reset(&self, req: &PasswordResetRequest) -> ConsoleResult<()>;
    async fn reset_password(&self, req: &NewPasswordRequest) -> ConsoleResult<()>;
}

/// HTTP implementation over the REST backend
#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthBackend {
    pub fn new(config: &ConsoleConfig) -> ConsoleResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make a POST request with JSON body and unwrap the API envelope
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ConsoleResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ConsoleError::Unauthorized),
                StatusCode::FORBIDDEN | StatusCode::BAD_REQUEST => {
                    Err(ConsoleError::AuthFailed(text))
                }
                _ => Err(ConsoleError::Backend(text)),
            };
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.is_success() {
            return Err(ConsoleError::AuthFailed(envelope.message));
        }
        envelope
            .into_data()
            .ok_or_else(|| ConsoleError::InvalidResponse("Missing response data".to_string()))
    }

    /// POST where the envelope carries no data
    async fn post_unit<B: Serialize + Sync>(&self, path: &str, body: &B) -> ConsoleResult<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(ConsoleError::AuthFailed(format!("{}: {}", status, text)));
        }

        let envelope: ApiResponse<serde_json::Value> = response.json().await?;
        if !envelope.is_success() {
            return Err(ConsoleError::AuthFailed(envelope.message));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, req: &LoginRequest) -> ConsoleResult<SessionRecord> {
        self.post("/api/auth/login", req).await
    }

    async fn verify_otp(&self, req: &OtpVerifyRequest) -> ConsoleResult<SessionRecord> {
        self.post("/api/auth/verify-otp", req).await
    }

    async fn register(&self, req: &RegisterRequest) -> ConsoleResult<()> {
        self.post_unit("/api/auth/register", req).await
    }

    async fn request_password_reset(&self, req: &PasswordResetRequest) -> ConsoleResult<()> {
        self.post_unit("/api/auth/forget-password", req).await
    }

    async fn reset_password(&self, req: &NewPasswordRequest) -> ConsoleResult<()> {
        self.post_unit("/api/auth/reset-password", req).await
    }
}

/// Login/logout orchestration over a backend and the session store.
///
/// A successful login or OTP verification replaces the persisted record
/// wholesale with the backend payload.
pub struct AuthService {
    backend: Arc<dyn AuthBackend>,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(backend: Arc<dyn AuthBackend>, store: Arc<dyn SessionStore>) -> Self {
        Self { backend, store }
    }

    pub async fn login(&self, req: &LoginRequest) -> ConsoleResult<SessionRecord> {
        let record = self.backend.login(req).await?;
        self.store.save(&record)?;

        tracing::info!(
            user_type = ?record.user_type,
            "User logged in"
        );
        Ok(record)
    }

    pub async fn verify_otp(&self, req: &OtpVerifyRequest) -> ConsoleResult<SessionRecord> {
        let record = self.backend.verify_otp(req).await?;
        self.store.save(&record)?;

        tracing::info!(
            user_type = ?record.user_type,
            "OTP verified, session established"
        );
        Ok(record)
    }

    /// Clear the persisted session. Clearing twice is a no-op.
    pub fn logout(&self) -> ConsoleResult<()> {
        self.store.clear()?;
        tracing::info!("User logged out");
        Ok(())
    }
}
