//! Outbound lead relay.
//!
//! After a lead is stored locally it is forwarded, best effort, to an external
//! form endpoint. The relay only reports whether the endpoint accepted it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::models::{LeadType, NewLead};

/// Errors a relay attempt can end with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("Relay transport failed: {0}")]
    Transport(String),

    #[error("Relay endpoint rejected submission with status {status}")]
    Rejected { status: u16 },
}

/// Body posted to the external form endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRelayPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(rename = "leadType")]
    pub lead_type: LeadType,
}

impl From<&NewLead> for LeadRelayPayload {
    fn from(lead: &NewLead) -> Self {
        Self {
            name: lead.name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            message: lead.message.clone(),
            lead_type: lead.lead_type,
        }
    }
}

/// Forwards a submitted lead to an external service.
#[async_trait::async_trait]
pub trait LeadRelay: Send + Sync {
    async fn relay(&self, payload: &LeadRelayPayload) -> Result<(), RelayError>;
}

/// In-process relay for development and tests.
///
/// Records every payload it receives and optionally fails each call.
#[derive(Debug, Clone, Default)]
pub struct MockLeadRelay {
    pub simulate_failure: bool,
    calls: Arc<AtomicUsize>,
}

impl MockLeadRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// A relay whose endpoint answers every submission with a 503.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            calls: Arc::default(),
        }
    }

    /// Number of relay attempts seen so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LeadRelay for MockLeadRelay {
    async fn relay(&self, payload: &LeadRelayPayload) -> Result<(), RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.simulate_failure {
            tracing::warn!(
                lead_type = %payload.lead_type,
                "Mock lead relay simulating failure"
            );
            return Err(RelayError::Rejected { status: 503 });
        }

        tracing::info!(
            lead_type = %payload.lead_type,
            "Mock: Would relay lead submission"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> LeadRelayPayload {
        LeadRelayPayload {
            name: "Ramesh Gupta".to_string(),
            email: "ramesh@example.com".to_string(),
            phone: "9876543210".to_string(),
            message: "Warangal".to_string(),
            lead_type: LeadType::Franchise,
        }
    }

    #[test]
    fn test_payload_wire_format() {
        let value = serde_json::to_value(payload()).unwrap();
        assert_eq!(value["leadType"], "FRANCHISE");
        assert_eq!(value["name"], "Ramesh Gupta");
        assert!(value.get("lead_type").is_none());
    }

    #[tokio::test]
    async fn test_mock_relay_success_counts_calls() {
        let relay = MockLeadRelay::new();
        assert!(relay.relay(&payload()).await.is_ok());
        assert!(relay.relay(&payload()).await.is_ok());
        assert_eq!(relay.calls(), 2);
    }

    #[tokio::test]
    async fn test_mock_relay_failure() {
        let relay = MockLeadRelay::failing();
        let shared = relay.clone();

        let result = relay.relay(&payload()).await;
        assert_eq!(result, Err(RelayError::Rejected { status: 503 }));
        assert_eq!(shared.calls(), 1);
    }
}
