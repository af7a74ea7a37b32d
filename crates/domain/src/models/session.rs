//! Admin login request/response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin login request.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Issued admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl LoginResponse {
    pub fn bearer(token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_at,
        }
    }
}
