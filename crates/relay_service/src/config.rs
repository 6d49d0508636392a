//! Configuration management for the relay
//!
//! Supports loading configuration from environment variables with
//! fallback to defaults.

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Bind configuration for the relay server.
///
/// Environment variables:
/// - `APP_HOST`: bind address (default: 127.0.0.1)
/// - `APP_PORT`: listen port (default: 8080)
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("APP_HOST")
                .ok()
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: std::env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_config_has_sensible_defaults() {
        let config = RelayConfig::default();
        assert!(!config.host.is_empty());
        assert!(config.port > 0);
    }
}
