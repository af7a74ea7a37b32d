//! Admin session middleware.
//!
//! Guards every admin API route. A request passes only with an
//! `Authorization: Bearer <token>` header holding a valid, unexpired admin
//! session token.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::session::SessionError;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminSession;

/// Returns the bearer token from the `Authorization` header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Validates the bearer token and makes the session available to handlers.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(req.headers()) else {
        return ApiError::Unauthorized("Missing admin session".to_string()).into_response();
    };

    match state.sessions.validate(token) {
        Ok(claims) => {
            req.extensions_mut().insert(AdminSession::from(claims));
            next.run(req).await
        }
        Err(SessionError::Expired) => {
            tracing::debug!("Rejected expired admin session");
            ApiError::Unauthorized("Admin session has expired".to_string()).into_response()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected admin session");
            ApiError::Unauthorized("Invalid admin session".to_string()).into_response()
        }
    }
}
