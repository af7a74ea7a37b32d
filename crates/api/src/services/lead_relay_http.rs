//! HTTP lead relay.
//!
//! Posts each lead as JSON to the configured form endpoint. Only the response
//! status is inspected: any 2xx is success. There is no retry.

use async_trait::async_trait;
use domain::services::{LeadRelay, LeadRelayPayload, RelayError};
use reqwest::{header, Client};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::RelayConfig;

pub struct HttpLeadRelay {
    client: Client,
    endpoint: String,
}

impl HttpLeadRelay {
    /// Builds a relay with the configured endpoint and request timeout.
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!("franchise-cms/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl LeadRelay for HttpLeadRelay {
    async fn relay(&self, payload: &LeadRelayPayload) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, timeout = e.is_timeout(), "Lead relay request failed");
                RelayError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            info!(status = status.as_u16(), "Lead relayed");
            Ok(())
        } else {
            warn!(status = status.as_u16(), "Lead relay endpoint rejected submission");
            Err(RelayError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
