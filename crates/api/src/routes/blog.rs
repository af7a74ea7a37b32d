//! Public blog listing.

use axum::{extract::State, Json};
use domain::models::{ListPagesResponse, PageType};
use persistence::repositories::PageRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::run_blocking;

/// GET /api/v1/blog
///
/// Published blog posts in insertion order.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<ListPagesResponse>, ApiError> {
    let repo = PageRepository::new(state.store.clone());
    let pages = run_blocking(move || repo.list_published(PageType::Blog)).await?;

    Ok(Json(ListPagesResponse {
        total: pages.len(),
        pages,
    }))
}
