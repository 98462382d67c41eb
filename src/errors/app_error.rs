use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::core::pipeline::PipelineError;
use crate::core::romanize::ValidationError;
use crate::core::tts::SynthesisError;

/// Application error type mapped onto the HTTP error contract:
/// `{"error": ..., "details": ...}` with 400 for validation rejections and
/// 500 for synthesis or internal failures.
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Synthesis(SynthesisError),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match self {
            AppError::Validation(e) => {
                tracing::warn!("Invalid text input ({}): {}", e.reason(), e);
                (StatusCode::BAD_REQUEST, "Invalid text input", e.to_string())
            }
            AppError::Synthesis(e) => {
                tracing::error!("Audio generation failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Audio generation failed",
                    e.to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    msg,
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "details": details
        }));

        (status, body).into_response()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "Invalid text input: {e}"),
            AppError::Synthesis(e) => write!(f, "Audio generation failed: {e}"),
            AppError::Internal(msg) => write!(f, "Internal server error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Validation(e) => AppError::Validation(e),
            PipelineError::Synthesis(e) => AppError::Synthesis(e),
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
