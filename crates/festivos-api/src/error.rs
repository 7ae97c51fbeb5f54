//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
///
/// The holiday service itself is total (bad catalog entries are skipped,
/// bad dates become verdicts), so the only failure the API ever reports
/// is an unacceptable request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request is well-formed HTTP but semantically unacceptable.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}
