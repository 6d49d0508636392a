//! Client-side configuration.
//!
//! Environment variables:
//! - `CHAT_API_BASE`: base URL of the relay (default: <http://127.0.0.1:8080>)
//! - `CHAT_API_TIMEOUT_SECS`: whole-request timeout in seconds (default: 30)

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the relay, without the `/api/chat` suffix.
    pub base_url: String,
    /// Whole-request timeout. The only bound on a round trip; there is
    /// no cancellation above the transport.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load from environment variables with fallback to defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CHAT_API_BASE")
                .ok()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout: Duration::from_secs(
                std::env::var("CHAT_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
