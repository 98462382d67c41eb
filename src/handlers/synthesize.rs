use axum::{
    extract::State,
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// Request body for the synthesize endpoint
#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    /// The Sinhala text to synthesize
    pub text: String,
}

/// Handler for the /api/synthesize endpoint.
///
/// Returns WAV audio on success, or `{"error", "details"}` JSON with 400
/// for rejected input and 500 for synthesis failures. The `x-cache` header
/// reports whether the audio came from the result cache.
pub async fn synthesize_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SynthesizeRequest>,
) -> Response {
    info!(
        "Synthesis request received - text length: {}",
        request.text.chars().count()
    );

    let output = match state.pipeline().synthesize(&request.text).await {
        Ok(output) => output,
        Err(e) => return AppError::from(e).into_response(),
    };

    info!(
        "Responding with {} bytes of audio (cached: {})",
        output.audio.len(),
        output.cached
    );

    let cache_status = if output.cached { "hit" } else { "miss" };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/wav"),
            (HeaderName::from_static("x-cache"), cache_status),
        ],
        output.audio,
    )
        .into_response()
}
