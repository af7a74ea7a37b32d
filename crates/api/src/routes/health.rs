//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::keys::SEED_MARKER_KEY;
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: StorageHealth,
    pub relay: RelayHealth,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageHealth {
    pub reachable: bool,
    /// Whether the seed marker is present.
    pub seeded: bool,
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RelayHealth {
    pub enabled: bool,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// GET /api/health
///
/// Reports store reachability and relay configuration. The relay endpoint
/// itself is never probed.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let start = std::time::Instant::now();
    let seeded = state.store.contains(SEED_MARKER_KEY);
    let latency_ms = start.elapsed().as_millis() as u64;

    let reachable = seeded.is_ok();
    let response = HealthResponse {
        status: if reachable { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: StorageHealth {
            reachable,
            seeded: seeded.unwrap_or(false),
            latency_ms: reachable.then_some(latency_ms),
        },
        relay: RelayHealth {
            enabled: state.relay.is_some(),
        },
    };

    if reachable {
        Ok(Json(response))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

/// GET /api/health/live
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// GET /api/health/ready
///
/// Ready once the store is reachable and seeded.
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, StatusCode> {
    match state.store.contains(SEED_MARKER_KEY) {
        Ok(true) => Ok(Json(StatusResponse {
            status: "ready".to_string(),
        })),
        _ => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}
