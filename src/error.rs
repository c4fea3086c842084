use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::gemini::GenerationError;
use crate::rate_limit::Rejection;

// Handler-level errors, each rendered as `{"error": ...}`
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    RateLimited(#[from] Rejection),

    #[error("generation failed")]
    GenerationFailed(#[from] GenerationError),

    #[error("{0}")]
    InvalidRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
