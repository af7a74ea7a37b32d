//! Public lead intake endpoint.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::NewLead;
use persistence::repositories::LeadRepository;
use serde::Serialize;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::{submit_lead, SubmissionOutcome};

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LeadSubmissionResponse {
    pub lead_id: String,
    pub relay: SubmissionOutcome,
}

/// POST /api/v1/leads
///
/// Stores the lead, then relays it. Answers 201 when the relay succeeded or
/// is disabled, 502 (with the stored lead id) when only the relay failed.
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<NewLead>,
) -> Result<(StatusCode, Json<LeadSubmissionResponse>), ApiError> {
    request.validate()?;

    let leads = LeadRepository::new(state.store.clone());
    let submission = submit_lead(&leads, state.relay.as_deref(), request).await?;

    match submission.outcome {
        SubmissionOutcome::Error { message } => Err(ApiError::BadGateway {
            message: format!("Inquiry saved but could not be forwarded: {}", message),
            lead_id: Some(submission.lead.id),
        }),
        outcome => Ok((
            StatusCode::CREATED,
            Json(LeadSubmissionResponse {
                lead_id: submission.lead.id,
                relay: outcome,
            }),
        )),
    }
}
