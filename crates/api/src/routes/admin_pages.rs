//! Admin page management.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{ListPagesResponse, Page, PageDraft};
use persistence::repositories::PageRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminSession;
use crate::services::run_blocking;

/// GET /api/v1/admin/pages
pub async fn list_pages(State(state): State<AppState>) -> Result<Json<ListPagesResponse>, ApiError> {
    let repo = PageRepository::new(state.store.clone());
    let pages = run_blocking(move || repo.list_pages()).await?;

    Ok(Json(ListPagesResponse {
        total: pages.len(),
        pages,
    }))
}

/// GET /api/v1/admin/pages/:id
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Page>, ApiError> {
    let repo = PageRepository::new(state.store.clone());
    run_blocking(move || repo.find_by_id(&id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Page not found".to_string()))
}

/// POST /api/v1/admin/pages
///
/// Any id in the body is ignored; a fresh one is assigned.
pub async fn create_page(
    State(state): State<AppState>,
    session: AdminSession,
    Json(mut draft): Json<PageDraft>,
) -> Result<(StatusCode, Json<Page>), ApiError> {
    draft.validate()?;
    draft.id.clear();

    let repo = PageRepository::new(state.store.clone());
    let page = run_blocking(move || repo.save_page(draft)).await?;

    info!(page_id = %page.id, slug = %page.slug, jti = %session.jti, "Page created");
    Ok((StatusCode::CREATED, Json(page)))
}

/// PUT /api/v1/admin/pages/:id
pub async fn update_page(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
    Json(draft): Json<PageDraft>,
) -> Result<Json<Page>, ApiError> {
    draft.validate()?;

    let repo = PageRepository::new(state.store.clone());
    let page = run_blocking(move || repo.update_existing(&id, draft))
        .await?
        .ok_or_else(|| ApiError::NotFound("Page not found".to_string()))?;

    info!(page_id = %page.id, slug = %page.slug, jti = %session.jti, "Page updated");
    Ok(Json(page))
}

/// DELETE /api/v1/admin/pages/:id
///
/// 204 whether or not the page existed.
pub async fn delete_page(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let repo = PageRepository::new(state.store.clone());
    let target = id.clone();
    let removed = run_blocking(move || repo.delete_page(&target)).await?;

    info!(page_id = %id, removed, jti = %session.jti, "Page delete requested");
    Ok(StatusCode::NO_CONTENT)
}
