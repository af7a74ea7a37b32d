//! Admin site settings.

use axum::{extract::State, Json};
use domain::models::SiteConfig;
use persistence::repositories::SiteConfigRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminSession;
use crate::services::run_blocking;

/// GET /api/v1/admin/settings
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<SiteConfig>, ApiError> {
    let repo = SiteConfigRepository::new(state.store.clone());
    let config = run_blocking(move || repo.get_config()).await?;
    Ok(Json(config))
}

/// PUT /api/v1/admin/settings
///
/// Replaces the whole config. Concurrent saves are last-write-wins.
pub async fn update_settings(
    State(state): State<AppState>,
    session: AdminSession,
    Json(config): Json<SiteConfig>,
) -> Result<Json<SiteConfig>, ApiError> {
    config.validate()?;

    let repo = SiteConfigRepository::new(state.store.clone());
    let config = run_blocking(move || repo.save_config(&config).map(|()| config)).await?;

    info!(jti = %session.jti, "Site settings updated");
    Ok(Json(config))
}
