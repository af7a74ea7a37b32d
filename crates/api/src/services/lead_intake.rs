//! Lead intake pipeline.
//!
//! 1. Store the lead locally. A storage failure ends the submission and no
//!    relay is attempted.
//! 2. Relay it to the external endpoint, best effort. A relay failure is
//!    reported to the caller but the stored lead is kept.

use domain::models::{Lead, NewLead};
use domain::services::{LeadRelay, LeadRelayPayload};
use persistence::repositories::LeadRepository;
use persistence::StoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::middleware::metrics::{record_lead_captured, record_relay_outcome};

/// Failure of the local write. The relay is never attempted after one.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Lead storage task failed: {0}")]
    Task(String),
}

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::Store(e) => e.into(),
            IntakeError::Task(msg) => ApiError::Internal(msg),
        }
    }
}

/// Result of the relay step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Success,
    Error { message: String },
    /// Relay disabled by configuration.
    Skipped,
}

impl SubmissionOutcome {
    fn label(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success => "success",
            SubmissionOutcome::Error { .. } => "error",
            SubmissionOutcome::Skipped => "skipped",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeadSubmission {
    pub lead: Lead,
    pub outcome: SubmissionOutcome,
}

/// Stores `input` and then relays it through `relay`, if one is given.
///
/// The local write runs on the blocking pool.
pub async fn submit_lead(
    leads: &LeadRepository,
    relay: Option<&dyn LeadRelay>,
    input: NewLead,
) -> Result<LeadSubmission, IntakeError> {
    let payload = LeadRelayPayload::from(&input);

    let repo = leads.clone();
    let lead = tokio::task::spawn_blocking(move || repo.add_lead(input))
        .await
        .map_err(|e| IntakeError::Task(e.to_string()))??;
    record_lead_captured(lead.lead_type.as_str());

    let outcome = match relay {
        None => SubmissionOutcome::Skipped,
        Some(relay) => match relay.relay(&payload).await {
            Ok(()) => SubmissionOutcome::Success,
            Err(e) => {
                warn!(lead_id = %lead.id, error = %e, "Lead stored locally but relay failed");
                SubmissionOutcome::Error {
                    message: e.to_string(),
                }
            }
        },
    };
    record_relay_outcome(outcome.label());

    info!(lead_id = %lead.id, relay = outcome.label(), "Lead submission processed");
    Ok(LeadSubmission { lead, outcome })
}
