//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageConfig,
    pub generation: GenerationConfig,
    pub checkout: CheckoutConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory for the file-backed store; in-memory when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,
}

/// External generation service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Credential; generation is disabled when unset
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_generation_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
    #[serde(default = "default_generation_timeout")]
    pub timeout_secs: u64,
}

impl GenerationConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Simulated checkout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default = "default_checkout_delay")]
    pub processing_delay_ms: u64,
}

impl CheckoutConfig {
    #[must_use]
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

// Default value functions
fn default_app_name() -> String {
    "art-gallery".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_quota_bytes() -> usize {
    5 * 1024 * 1024 // typical browser storage budget
}

fn default_generation_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_generation_timeout() -> u64 {
    30
}

fn default_checkout_delay() -> u64 {
    1800
}

/// Parse an optional numeric variable, falling back to `default` when unset
fn parse_or<T, F>(
    lookup: &F,
    var: &'static str,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(var, raw)),
        None => Ok(default()),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(raw) => match raw.to_lowercase().as_str() {
                "production" => Environment::Production,
                "staging" => Environment::Staging,
                "development" => Environment::Development,
                _ => return Err(ConfigError::InvalidValue("APP_ENV", raw)),
            },
            None => default_env(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            storage: StorageConfig {
                data_dir: lookup("STORAGE_DIR")
                    .filter(|s| !s.trim().is_empty())
                    .map(PathBuf::from),
                quota_bytes: parse_or(&lookup, "STORAGE_QUOTA_BYTES", default_quota_bytes)?,
            },
            generation: GenerationConfig {
                api_key: lookup("GENERATION_API_KEY").filter(|s| !s.is_empty()),
                endpoint: lookup("GENERATION_ENDPOINT")
                    .unwrap_or_else(default_generation_endpoint),
                text_model: lookup("GENERATION_TEXT_MODEL").unwrap_or_else(default_text_model),
                image_model: lookup("GENERATION_IMAGE_MODEL")
                    .unwrap_or_else(default_image_model),
                timeout_secs: parse_or(
                    &lookup,
                    "GENERATION_TIMEOUT_SECS",
                    default_generation_timeout,
                )?,
            },
            checkout: CheckoutConfig {
                processing_delay_ms: parse_or(
                    &lookup,
                    "CHECKOUT_DELAY_MS",
                    default_checkout_delay,
                )?,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
