use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::CoreState;
use crate::core::cache::AudioCache;
use crate::core::pipeline::SpeechPipeline;
use crate::core::tts::SynthesisError;

/// Application state that can be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    /// Core layer state: romanization tables, audio cache, pipeline
    pub core_state: Arc<CoreState>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Arc<Self>, SynthesisError> {
        let core_state = CoreState::new(&config)?;

        Ok(Arc::new(Self { config, core_state }))
    }

    /// Get a handle to the request pipeline
    pub fn pipeline(&self) -> Arc<SpeechPipeline> {
        self.core_state.pipeline.clone()
    }

    /// Get a handle to the application's audio cache
    pub fn cache(&self) -> Arc<AudioCache> {
        self.core_state.cache.clone()
    }
}
