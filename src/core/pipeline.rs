//! Request pipeline: validate → cache lookup → transliterate → synthesize →
//! cache store → respond.
//!
//! The pipeline owns its collaborators explicitly (no process-wide
//! singletons), so multiple independent instances can coexist and tests can
//! inject a mock synthesizer. The validator and engine are pure; the cache
//! is the only shared mutable resource and no cache lock is held across the
//! synthesis call. Two concurrent requests for the same uncached text may
//! both invoke synthesis; the duplication is tolerated rather than
//! serialized per fingerprint.

use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::cache::AudioCache;
use crate::core::romanize::{RomanizationTable, TextValidator, ValidationError};
use crate::core::tts::{SharedSynthesizer, SynthesisError};

/// Terminal failure states of the pipeline.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    /// Input rejected before any processing; the validator's reason is
    /// surfaced verbatim.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The external synthesis collaborator failed; nothing was cached.
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// A successful synthesis response.
#[derive(Debug, Clone)]
pub struct SpeechOutput {
    /// Waveform bytes in the container named by `format`.
    pub audio: Bytes,
    /// Audio container format (always "wav" for the current collaborator).
    pub format: String,
    /// Whether the audio was served from the cache.
    pub cached: bool,
}

/// Orchestrates a single synthesis request end to end.
pub struct SpeechPipeline {
    validator: TextValidator,
    table: Arc<RomanizationTable>,
    cache: Arc<AudioCache>,
    synthesizer: SharedSynthesizer,
}

impl SpeechPipeline {
    pub fn new(
        validator: TextValidator,
        table: Arc<RomanizationTable>,
        cache: Arc<AudioCache>,
        synthesizer: SharedSynthesizer,
    ) -> Self {
        Self {
            validator,
            table,
            cache,
            synthesizer,
        }
    }

    /// Runs the full pipeline for one request.
    ///
    /// The cache key is always the fingerprint of the validated input text,
    /// never of its Romanized form; the engine is invoked on that same
    /// original text on a miss.
    pub async fn synthesize(&self, text: &str) -> Result<SpeechOutput, PipelineError> {
        let text = text.trim();

        if let Err(e) = self.validator.validate(text) {
            warn!("Rejected synthesis request ({}): {}", e.reason(), e);
            return Err(e.into());
        }

        if let Some(audio) = self.cache.lookup(text).await {
            info!("Serving cached audio ({} bytes)", audio.len());
            return Ok(SpeechOutput {
                audio,
                format: "wav".to_string(),
                cached: true,
            });
        }

        let roman = self.table.transliterate(text);
        debug!("Romanized text: {}", truncate_for_log(&roman, 50));

        // Synthesis may block for model inference; the cache holds no lock
        // across this await.
        let audio = self.synthesizer.synthesize(&roman).await?;

        self.cache.store(text, audio.data.clone()).await;
        info!(
            "Synthesized {} bytes of {} audio",
            audio.data.len(),
            audio.format
        );

        Ok(SpeechOutput {
            audio: audio.data,
            format: audio.format,
            cached: false,
        })
    }

    /// Read access to the cache for diagnostics.
    pub fn cache(&self) -> &AudioCache {
        &self.cache
    }
}

fn truncate_for_log(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max_chars).collect();
        format!("{prefix}...")
    }
}
