//! Admin authentication.
//!
//! The site has a single admin identity. Login checks the submitted password
//! against the configured Argon2id hash and issues an expiring session token.

use shared::password::{verify_admin_password, PasswordError};
use shared::session::{IssuedSession, SessionConfig, SessionError};
use std::sync::Arc;
use thiserror::Error;

use crate::error::ApiError;

/// Errors that can occur during admin authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid password")]
    InvalidPassword,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Session error: {0}")]
    SessionError(#[from] SessionError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidPassword => ApiError::Unauthorized("Invalid password".to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Verifies the admin password and issues sessions.
#[derive(Clone)]
pub struct AdminAuthService {
    password_hash: Arc<str>,
    sessions: Arc<SessionConfig>,
}

impl AdminAuthService {
    pub fn new(password_hash: &str, sessions: Arc<SessionConfig>) -> Self {
        Self {
            password_hash: Arc::from(password_hash),
            sessions,
        }
    }

    /// Checks `password` and issues a new session on success.
    ///
    /// Hash verification is CPU-bound, so it runs on the blocking pool.
    pub async fn login(&self, password: String) -> Result<IssuedSession, AuthError> {
        let hash = Arc::clone(&self.password_hash);
        let matches = tokio::task::spawn_blocking(move || verify_admin_password(&password, &hash))
            .await
            .map_err(|e| AuthError::Internal(format!("Password check task failed: {}", e)))??;

        if !matches {
            tracing::warn!("Admin login rejected");
            return Err(AuthError::InvalidPassword);
        }

        let session = self.sessions.issue()?;
        tracing::info!(jti = %session.jti, expires_at = %session.expires_at, "Admin session issued");
        Ok(session)
    }
}
