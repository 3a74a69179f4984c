//! Error handling at the HTTP boundary.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use neuryx_common::NeuryxError;

/// Wrapper mapping core errors onto HTTP responses. Failures always carry
/// the `{error, success: false}` body shape clients already parse, as a
/// 500 regardless of cause.
#[derive(Debug)]
pub struct ApiError(pub NeuryxError);

impl From<NeuryxError> for ApiError {
    fn from(err: NeuryxError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(NeuryxError::Internal(anyhow::anyhow!(
            "invalid request body: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Validation failures are routine client mistakes; anything else
        // warrants an error log.
        if matches!(self.0, NeuryxError::Validation { .. }) {
            tracing::debug!(error = %self.0, "request rejected");
        } else {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(json!({
            "error": self.0.to_string(),
            "success": false,
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
