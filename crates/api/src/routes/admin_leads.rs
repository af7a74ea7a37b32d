//! Admin lead management.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use domain::models::{Lead, ListLeadsQuery, ListLeadsResponse, UpdateLeadStatusRequest};
use persistence::repositories::LeadRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminSession;
use crate::services::run_blocking;

/// GET /api/v1/admin/leads?status=NEW
///
/// Most recent first, optionally filtered by status.
pub async fn list_leads(
    State(state): State<AppState>,
    Query(query): Query<ListLeadsQuery>,
) -> Result<Json<ListLeadsResponse>, ApiError> {
    let repo = LeadRepository::new(state.store.clone());
    let leads = run_blocking(move || match query.status {
        Some(status) => repo.list_by_status(status),
        None => repo.list_leads(),
    })
    .await?;

    Ok(Json(ListLeadsResponse {
        total: leads.len(),
        leads,
    }))
}

/// PATCH /api/v1/admin/leads/:id/status
///
/// Any status may follow any other.
pub async fn update_lead_status(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
    Json(request): Json<UpdateLeadStatusRequest>,
) -> Result<Json<Lead>, ApiError> {
    let repo = LeadRepository::new(state.store.clone());
    let lead = run_blocking(move || repo.update_lead_status(&id, request.status))
        .await?
        .ok_or_else(|| ApiError::NotFound("Lead not found".to_string()))?;

    info!(lead_id = %lead.id, status = %lead.status, jti = %session.jti, "Lead status changed by admin");
    Ok(Json(lead))
}
