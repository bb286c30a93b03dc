use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "gemini-pro";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_AUGMENTATION_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
/// Every variable is optional; augmentation stays off unless explicitly enabled.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub augmentation: AugmentationConfig,
}

/// Settings for the optional text-generation collaborator.
#[derive(Clone)]
pub struct AugmentationConfig {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

// Keeps the API key out of logs.
impl std::fmt::Debug for AugmentationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AugmentationConfig")
            .field("enabled", &self.enabled)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let enabled = lookup("USE_GEMINI")
            .or_else(|| lookup("NEXT_PUBLIC_USE_GEMINI"))
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let timeout_secs = match lookup("AUGMENTATION_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("AUGMENTATION_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_AUGMENTATION_TIMEOUT_SECS,
        };

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            augmentation: AugmentationConfig {
                enabled,
                api_key: lookup("GOOGLE_API_KEY").filter(|k| !k.trim().is_empty()),
                model: lookup("GENERATIVE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
