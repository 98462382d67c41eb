use std::env;
use std::time::Duration;

use crate::core::romanize::SinhalaBlock;
use crate::core::tts::VITS_DEFAULT_URL;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    // Synthesis collaborator configuration
    pub vits_server_url: String,
    pub request_timeout_seconds: u64,

    // Cache configuration
    pub cache_ttl_hours: u64,

    // Sinhala Unicode block bounds used by the validator
    pub sinhala_unicode_lower: u32,
    pub sinhala_unicode_upper: u32,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid port number: {e}"))?;

        let vits_server_url =
            env::var("VITS_SERVER_URL").unwrap_or_else(|_| VITS_DEFAULT_URL.to_string());
        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);

        let cache_ttl_hours = env::var("CACHE_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(24);

        let sinhala_unicode_lower = parse_code_point("SINHALA_UNICODE_LOWER", 0x0D80)?;
        let sinhala_unicode_upper = parse_code_point("SINHALA_UNICODE_UPPER", 0x0DFF)?;

        Ok(ServerConfig {
            host,
            port,
            vits_server_url,
            request_timeout_seconds,
            cache_ttl_hours,
            sinhala_unicode_lower,
            sinhala_unicode_upper,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours * 60 * 60)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn sinhala_block(&self) -> SinhalaBlock {
        SinhalaBlock {
            lower: self.sinhala_unicode_lower,
            upper: self.sinhala_unicode_upper,
        }
    }
}

/// Parses a code point env var given as hex (with optional 0x prefix) or
/// decimal, falling back to `default` when unset.
fn parse_code_point(var: &str, default: u32) -> Result<u32, Box<dyn std::error::Error>> {
    match env::var(var) {
        Ok(value) => {
            let trimmed = value.trim();
            let parsed = if let Some(hex) = trimmed
                .strip_prefix("0x")
                .or_else(|| trimmed.strip_prefix("0X"))
            {
                u32::from_str_radix(hex, 16)
            } else {
                trimmed.parse::<u32>()
            };
            parsed.map_err(|e| format!("Invalid {var}: {e}").into())
        }
        Err(_) => Ok(default),
    }
}
