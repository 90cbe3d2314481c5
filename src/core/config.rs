//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (with `.env` support) or defaults. Tools receive the
//! configuration by reference rather than reading the process environment
//! themselves, so tests can substitute values without touching env state.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Name of the environment variable holding the dev.to API key.
pub const DEVTO_API_KEY_ENV: &str = "DEVTO_API_KEY";

/// Default endpoint for creating dev.to articles.
pub const DEVTO_API_URL_DEFAULT: &str = "https://dev.to/api/articles";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// dev.to API configuration and credentials.
    pub devto: DevtoConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    // Prompts are registered in domains/prompts/registry.rs
    // Add prompt-specific configuration here if needed.
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the outbound dev.to API.
#[derive(Clone, Serialize, Deserialize)]
pub struct DevtoConfig {
    /// dev.to API key used to authenticate article creation.
    /// Generate one under Settings > Extensions on dev.to.
    pub api_key: Option<String>,

    /// Endpoint for creating articles. Overridable for tests or
    /// self-hosted Forem instances.
    pub api_url: String,
}

/// Custom Debug implementation to redact the secret from logs.
impl std::fmt::Debug for DevtoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevtoConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Default for DevtoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEVTO_API_URL_DEFAULT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "devto-blog-publisher".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            devto: DevtoConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `DEVTO_API_KEY`, `DEVTO_API_URL`. A `.env` file in the working
    /// directory is honored if present. The API key itself is never logged.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(api_key) = std::env::var(DEVTO_API_KEY_ENV) {
            config.devto.api_key = Some(api_key);
            info!("dev.to API key loaded from environment");
        }

        if let Ok(api_url) = std::env::var("DEVTO_API_URL") {
            info!("dev.to API endpoint overridden: {}", api_url);
            config.devto.api_url = api_url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(DEVTO_API_KEY_ENV, "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.devto.api_key.as_deref(), Some("test_key_12345"));
        unsafe {
            std::env::remove_var(DEVTO_API_KEY_ENV);
        }
    }

    #[test]
    fn test_api_key_absent_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var(DEVTO_API_KEY_ENV);
        }
        let config = Config::from_env();
        assert!(config.devto.api_key.is_none());
    }

    #[test]
    fn test_api_url_default() {
        let config = Config::default();
        assert_eq!(config.devto.api_url, DEVTO_API_URL_DEFAULT);
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let devto = DevtoConfig {
            api_key: Some("super_secret_key".to_string()),
            api_url: DEVTO_API_URL_DEFAULT.to_string(),
        };
        let debug_str = format!("{:?}", devto);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
