//! Admin session extractors.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use chrono::{DateTime, Utc};
use shared::session::SessionClaims;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::bearer_token;

/// An authenticated admin session.
///
/// Taken from request extensions when `require_admin` already validated the
/// token, otherwise validated here.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Token ID, for log correlation.
    pub jti: String,
    pub expires_at: DateTime<Utc>,
}

impl From<SessionClaims> for AdminSession {
    fn from(claims: SessionClaims) -> Self {
        Self {
            expires_at: claims.expires_at(),
            jti: claims.jti,
        }
    }
}

impl AdminSession {
    fn from_parts(parts: &Parts, state: &AppState) -> Option<Self> {
        if let Some(session) = parts.extensions.get::<AdminSession>() {
            return Some(session.clone());
        }

        let token = bearer_token(&parts.headers)?;
        state.sessions.validate(token).ok().map(Self::from)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::from_parts(parts, state)
            .ok_or_else(|| ApiError::Unauthorized("Invalid or expired admin session".to_string()))
    }
}

/// Admin session if the request carries a valid one. Never rejects.
///
/// Used by public routes whose result depends on whether an admin is signed
/// in, such as route resolution for admin paths.
#[derive(Debug, Clone)]
pub struct OptionalAdminSession(pub Option<AdminSession>);

impl OptionalAdminSession {
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for OptionalAdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAdminSession(AdminSession::from_parts(parts, state)))
    }
}
