//! Service health and per-domain model status.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use neuryx_core::EngineStatus;

use crate::state::SharedState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    timestamp: DateTime<Utc>,
    models: ModelsStatus,
}

#[derive(Serialize)]
pub struct ModelsStatus {
    alzheimer: EngineStatus,
    parkinson: EngineStatus,
}

/// GET /api/health
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "neuryx",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
        models: ModelsStatus {
            alzheimer: state.alzheimer.status(),
            parkinson: state.parkinson.status(),
        },
    })
}
