//! Error types for the terms API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared_types::TermsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No terms and conditions content found")]
    NoContent,

    #[error("Analysis is paused")]
    Paused,

    #[error("Cannot analyze browser-internal pages or local files: {0}")]
    RestrictedUrl(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Analysis failed: {0}")]
    Analysis(String),
}

impl From<TermsError> for ApiError {
    fn from(err: TermsError) -> Self {
        match err {
            TermsError::NoContent => ApiError::NoContent,
            TermsError::Analysis(msg) => ApiError::Analysis(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NoContent => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Paused => (StatusCode::CONFLICT, self.to_string()),
            ApiError::RestrictedUrl(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Analysis(e) => {
                tracing::error!("Analysis error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
