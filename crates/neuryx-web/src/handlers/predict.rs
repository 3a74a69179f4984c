//! Prediction endpoints, one per disease domain.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::SharedState;

/// POST /api/alzheimer-prediction
pub async fn alzheimer_prediction(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let result = state.alzheimer.predict(&payload)?;
    Ok(Json(result))
}

/// POST /api/parkinson-prediction
pub async fn parkinson_prediction(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let result = state.parkinson.predict(&payload)?;
    Ok(Json(result))
}
