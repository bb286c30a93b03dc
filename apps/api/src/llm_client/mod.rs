/// LLM Client — the single point of entry for external text generation.
///
/// Callers depend only on the `TextGenerator` trait. The concrete backend is
/// chosen once at startup from configuration: `GeminiClient` when augmentation
/// is enabled and credentialed, `DisabledGenerator` otherwise. Tests plug in
/// their own stubs.
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;

pub use gemini::{GeminiClient, GeminiSettings};

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("text generation is disabled")]
    Disabled,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// A request/response text generation capability.
///
/// Implementations are untrusted: any output may be malformed, and any call
/// may fail. Callers must never need a successful result to make progress.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Short label for logs, e.g. "gemini" or "disabled".
    fn backend(&self) -> &'static str;
}

/// Backend used when augmentation is switched off or not credentialed.
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Disabled)
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_generator_always_fails() {
        let generator = DisabledGenerator;
        let result = generator.generate("anything").await;
        assert!(matches!(result, Err(LlmError::Disabled)));
        assert_eq!(generator.backend(), "disabled");
    }

    #[test]
    fn test_error_messages() {
        let err = LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 503): overloaded");
        assert_eq!(
            LlmError::Timeout(Duration::from_secs(10)).to_string(),
            "timed out after 10s"
        );
    }
}
