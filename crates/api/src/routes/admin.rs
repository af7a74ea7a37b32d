//! Admin login and dashboard.

use axum::{extract::State, Json};
use domain::models::{AdminStats, LoginRequest, LoginResponse};
use persistence::repositories::StatsRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::run_blocking;

/// POST /api/v1/admin/login
///
/// Exchanges the admin password for a session token. There is no lockout.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state.auth.login(request.password).await?;
    Ok(Json(LoginResponse::bearer(session.token, session.expires_at)))
}

/// GET /api/v1/admin/stats
///
/// Counts are recomputed from the store on every request.
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<AdminStats>, ApiError> {
    let repo = StatsRepository::new(state.store.clone());
    let stats = run_blocking(move || repo.compute_stats()).await?;
    Ok(Json(stats))
}
