pub mod cache;
pub mod pipeline;
pub mod romanize;
pub mod state;
pub mod tts;

// Re-export commonly used types for convenience
pub use cache::{AudioCache, AudioCacheConfig, CacheMetrics};

pub use pipeline::{PipelineError, SpeechOutput, SpeechPipeline};

pub use romanize::{RomanizationTable, SinhalaBlock, TextValidator, ValidationError};

pub use tts::{
    AudioData, SharedSynthesizer, SynthesisError, SynthesisResult, Synthesizer, VitsConfig,
    VitsSynthesizer, create_synthesizer,
};

// Re-export CoreState for external use
pub use state::CoreState;
