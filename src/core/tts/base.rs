//! Base abstraction for speech-synthesis providers.
//!
//! The synthesis model is an external collaborator: it consumes Romanized
//! text and returns waveform bytes, or fails with a human-readable error.
//! Providers may be slow and GPU-bound; callers must not hold shared locks
//! across a synthesis call.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

/// Audio returned by a synthesis provider.
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Waveform bytes in the container named by `format`.
    pub data: Bytes,
    /// Audio container format (e.g. "wav").
    pub format: String,
    /// Sample rate, when the provider reports one.
    pub sample_rate: Option<u32>,
}

/// Synthesis-specific error types.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SynthesisError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Audio generation failed: {0}")]
    GenerationFailed(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Timeout error: {0}")]
    Timeout(String),
}

/// Result type for synthesis operations.
pub type SynthesisResult<T> = Result<T, SynthesisError>;

/// An opaque text-to-waveform function.
#[async_trait]
pub trait Synthesizer: Send + Sync + std::fmt::Debug {
    /// Synthesizes speech for already-Romanized text.
    async fn synthesize(&self, text: &str) -> SynthesisResult<AudioData>;

    /// Provider-specific information for diagnostics.
    fn provider_info(&self) -> serde_json::Value {
        serde_json::json!({
            "provider": "unknown"
        })
    }
}

/// Shared handle to a synthesis provider.
pub type SharedSynthesizer = Arc<dyn Synthesizer>;
