//! Admin session tokens.
//!
//! A successful admin login issues a short-lived HS256 JWT. The route guard
//! accepts a request only when it carries a token that verifies against the
//! configured secret and has not expired.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Subject written into every admin session token.
pub const ADMIN_SUBJECT: &str = "site-admin";

/// Default leeway in seconds for clock skew tolerance.
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

/// Error type for session token operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to encode token: {0}")]
    EncodingError(String),

    #[error("Failed to decode token: {0}")]
    DecodingError(String),

    #[error("Session has expired")]
    Expired,

    #[error("Invalid session token")]
    InvalidToken,
}

/// Claims carried by an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

impl SessionClaims {
    /// Expiry as a UTC timestamp.
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or_else(Utc::now)
    }
}

/// A freshly issued session.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub jti: String,
    pub expires_at: DateTime<Utc>,
}

/// Signing and validation settings for admin sessions.
#[derive(Clone)]
pub struct SessionConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Session lifetime in seconds
    pub ttl_secs: i64,
    /// Leeway in seconds for clock skew tolerance
    pub leeway_secs: u64,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("ttl_secs", &self.ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl SessionConfig {
    /// Creates a session config from a shared HMAC secret.
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self::with_leeway(secret, ttl_secs, DEFAULT_LEEWAY_SECS)
    }

    pub fn with_leeway(secret: &str, ttl_secs: i64, leeway_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
            leeway_secs,
        }
    }

    /// Issues a new admin session token.
    pub fn issue(&self) -> Result<IssuedSession, SessionError> {
        let now = Utc::now();
        let jti = Uuid::new_v4().to_string();
        let expires_at = now + Duration::seconds(self.ttl_secs);

        let claims = SessionClaims {
            sub: ADMIN_SUBJECT.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            jti: jti.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| SessionError::EncodingError(e.to_string()))?;

        Ok(IssuedSession {
            token,
            jti,
            expires_at,
        })
    }

    /// Validates a token and returns its claims.
    pub fn validate(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = self.leeway_secs;

        let data = decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => SessionError::InvalidToken,
                _ => SessionError::DecodingError(e.to_string()),
            }
        })?;

        if data.claims.sub != ADMIN_SUBJECT {
            return Err(SessionError::InvalidToken);
        }

        Ok(data.claims)
    }
}
