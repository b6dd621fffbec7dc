//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GEMINI_API_KEY` - API key for the chat assistant
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STORE_NAME` - Restaurant name used in the order header (default: Brasa Burgers)
//! - `WHATSAPP_NUMBER` - Recipient of the checkout handoff message
//! - `GEMINI_MODEL` - Generative model name (default: gemini-2.5-flash)
//! - `GEMINI_BASE_URL` - Override for tests
//! - `VIACEP_BASE_URL` - Override for tests

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Default WhatsApp recipient for checkout handoffs.
const DEFAULT_WHATSAPP_NUMBER: &str = "5511973534101";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Restaurant name, used in the checkout message header
    pub store_name: String,
    /// WhatsApp number receiving checkout handoffs
    pub whatsapp_number: String,
    /// Chat assistant configuration
    pub gemini: GeminiConfig,
    /// Base URL of the postal-code lookup service
    pub viacep_base_url: String,
}

/// Gemini chat API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key for the generative-text service
    pub api_key: SecretString,
    /// Model name (e.g. gemini-2.5-flash)
    pub model: String,
    /// Base URL of the generative-text service
    pub base_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            store_name: get_env_or_default("STORE_NAME", "Brasa Burgers"),
            whatsapp_number: get_env_or_default("WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER),
            gemini: GeminiConfig::from_env()?,
            viacep_base_url: get_env_or_default("VIACEP_BASE_URL", "https://viacep.com.br"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl GeminiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: SecretString::from(get_required_env("GEMINI_API_KEY")?),
            model: get_env_or_default("GEMINI_MODEL", "gemini-2.5-flash"),
            base_url: get_env_or_default(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com",
            ),
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_the_api_key() {
        let config = GeminiConfig {
            api_key: SecretString::from("super-secret".to_owned()),
            model: "gemini-2.5-flash".to_owned(),
            base_url: "https://generativelanguage.googleapis.com".to_owned(),
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("super-secret"));
    }
}
