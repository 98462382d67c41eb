use std::sync::Arc;

use tracing::info;

use crate::config::ServerConfig;
use crate::core::cache::{AudioCache, AudioCacheConfig};
use crate::core::pipeline::SpeechPipeline;
use crate::core::romanize::{RomanizationTable, TextValidator};
use crate::core::tts::{SynthesisError, VitsConfig, create_synthesizer};

/// Core-specific shared state for the application.
///
/// Holds resources owned by the core layer: the expanded romanization
/// tables, the audio cache, and the request pipeline wired to the external
/// synthesis collaborator. Built once at startup; the tables are immutable
/// for the process lifetime.
#[derive(Clone)]
pub struct CoreState {
    /// Expanded grapheme-to-Roman mapping tables.
    pub romanizer: Arc<RomanizationTable>,
    /// In-memory TTL cache for synthesized audio.
    pub cache: Arc<AudioCache>,
    /// Request pipeline serving synthesis requests.
    pub pipeline: Arc<SpeechPipeline>,
}

impl CoreState {
    /// Initialize core state from server configuration.
    pub fn new(config: &ServerConfig) -> Result<Arc<Self>, SynthesisError> {
        let romanizer = Arc::new(RomanizationTable::new());
        info!("Romanization tables built");

        let cache = Arc::new(AudioCache::new(AudioCacheConfig {
            ttl: config.cache_ttl(),
            ..Default::default()
        }));
        info!(
            "Audio cache initialized (TTL: {} hours)",
            config.cache_ttl_hours
        );

        let synthesizer = create_synthesizer(
            "vits",
            VitsConfig {
                server_url: config.vits_server_url.clone(),
                request_timeout: config.request_timeout(),
            },
        )?;
        info!("Synthesis provider ready: {}", config.vits_server_url);

        let pipeline = Arc::new(SpeechPipeline::new(
            TextValidator::new(config.sinhala_block()),
            romanizer.clone(),
            cache.clone(),
            synthesizer,
        ));

        Ok(Arc::new(Self {
            romanizer,
            cache,
            pipeline,
        }))
    }
}
