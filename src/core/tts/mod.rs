pub mod base;
pub mod vits;

pub use base::{AudioData, SharedSynthesizer, SynthesisError, SynthesisResult, Synthesizer};
pub use vits::{VITS_DEFAULT_URL, VitsConfig, VitsSynthesizer};

use std::sync::Arc;

/// Factory function to create a synthesis provider.
///
/// # Supported Providers
///
/// - `"vits"` - HTTP-backed VITS model server
pub fn create_synthesizer(
    provider_type: &str,
    config: VitsConfig,
) -> SynthesisResult<SharedSynthesizer> {
    match provider_type.to_lowercase().as_str() {
        "vits" => Ok(Arc::new(VitsSynthesizer::new(config)?)),
        _ => Err(SynthesisError::InvalidConfiguration(format!(
            "Unsupported synthesis provider: {provider_type}. Supported providers: vits"
        ))),
    }
}
