//! HTTP client for a VITS model server.
//!
//! The neural model runs out of process (typically on a GPU host); this
//! client posts Romanized text and receives WAV bytes back. Everything the
//! model does is opaque to this crate.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::base::{AudioData, SynthesisError, SynthesisResult, Synthesizer};

/// Default endpoint for a locally running model server.
pub const VITS_DEFAULT_URL: &str = "http://localhost:5002/api/tts";

/// Configuration for the VITS model-server client.
#[derive(Debug, Clone)]
pub struct VitsConfig {
    /// Synthesis endpoint URL.
    pub server_url: String,
    /// Per-request timeout; model inference can be slow.
    pub request_timeout: Duration,
}

impl Default for VitsConfig {
    fn default() -> Self {
        Self {
            server_url: VITS_DEFAULT_URL.to_string(),
            request_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
}

/// Synthesizer backed by an HTTP VITS model server.
#[derive(Debug)]
pub struct VitsSynthesizer {
    client: reqwest::Client,
    config: VitsConfig,
}

impl VitsSynthesizer {
    pub fn new(config: VitsConfig) -> SynthesisResult<Self> {
        if config.server_url.is_empty() {
            return Err(SynthesisError::InvalidConfiguration(
                "VITS server URL cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                SynthesisError::InvalidConfiguration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Synthesizer for VitsSynthesizer {
    async fn synthesize(&self, text: &str) -> SynthesisResult<AudioData> {
        debug!(
            "Requesting synthesis from {} ({} chars)",
            self.config.server_url,
            text.chars().count()
        );

        let response = self
            .client
            .post(&self.config.server_url)
            .json(&SynthesisRequest { text })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout(format!("Synthesis request timed out: {e}"))
                } else {
                    SynthesisError::ConnectionFailed(format!(
                        "Failed to reach VITS server: {e}"
                    ))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ProviderError(format!(
                "VITS server returned {status}: {body}"
            )));
        }

        let data = response.bytes().await.map_err(|e| {
            SynthesisError::GenerationFailed(format!("Failed to read audio body: {e}"))
        })?;

        if data.is_empty() {
            return Err(SynthesisError::GenerationFailed(
                "VITS server returned an empty audio body".to_string(),
            ));
        }

        Ok(AudioData {
            data,
            format: "wav".to_string(),
            sample_rate: None,
        })
    }

    fn provider_info(&self) -> serde_json::Value {
        serde_json::json!({
            "provider": "vits",
            "server_url": self.config.server_url,
            "format": "wav"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_url() {
        let result = VitsSynthesizer::new(VitsConfig {
            server_url: String::new(),
            ..Default::default()
        });
        assert!(matches!(
            result.err(),
            Some(SynthesisError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_provider_info() {
        let synth = VitsSynthesizer::new(VitsConfig::default()).unwrap();
        let info = synth.provider_info();
        assert_eq!(info["provider"], "vits");
        assert_eq!(info["server_url"], VITS_DEFAULT_URL);
    }
}
