//! Optional AI clue assist.
//!
//! Two hosted-model providers behind one trait, plus [`clues`] with the
//! game-facing suggest and rank operations. Everything here is additive:
//! the games run fine with no provider configured.

mod ollama;
mod openai;

pub mod clues;

use async_trait::async_trait;
use std::time::Duration;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

/// Result type for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;

/// Errors that can occur during LLM operations
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Response parsing failed: {0}")]
    ParseError(String),
}

/// A single completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Full prompt text, instructions included
    pub prompt: String,
    /// Maximum response length in tokens (provider-dependent)
    pub max_tokens: Option<u32>,
    /// Timeout for the request
    pub timeout: Duration,
    /// Optional model override (e.g., "gpt-5" instead of configured model)
    pub model_override: Option<String>,
}

/// Response from an LLM provider
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// The generated text
    pub text: String,
    /// Provider-specific metadata (model used, tokens consumed, etc.)
    pub metadata: ResponseMetadata,
}

/// Metadata about the LLM response
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// Name of the provider (e.g., "openai", "ollama")
    pub provider: String,
    /// Model name used
    pub model: String,
    /// Tokens consumed (if available)
    pub tokens_used: Option<u32>,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Trait that all LLM providers must implement
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run one completion for the given request
    async fn complete(&self, request: CompletionRequest) -> LlmResult<CompletionResponse>;

    /// Get the name of this provider
    fn name(&self) -> &str;
}

/// Manager for multiple LLM providers
pub struct LlmManager {
    pub providers: Vec<Box<dyn LlmProvider>>,
}

impl LlmManager {
    /// Create a new LLM manager with the given providers
    pub fn new(providers: Vec<Box<dyn LlmProvider>>) -> Self {
        Self { providers }
    }

    /// Run one request against every provider concurrently.
    /// Returns (provider_name, response) pairs for the ones that succeeded;
    /// failures are logged and dropped.
    pub async fn complete_all(
        &self,
        request: CompletionRequest,
    ) -> Vec<(String, CompletionResponse)> {
        let mut tasks = Vec::new();

        for provider in &self.providers {
            let req = request.clone();
            let provider_name = provider.name().to_string();
            let provider_ref = provider.as_ref();

            tasks.push(async move {
                match provider_ref.complete(req).await {
                    Ok(response) => Some((provider_name, response)),
                    Err(e) => {
                        tracing::error!("Provider {} failed: {}", provider_name, e);
                        None
                    }
                }
            });
        }

        futures::future::join_all(tasks)
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// Run a request against a specific provider with a model override.
    /// model_id format: "provider:model" (e.g., "openai:gpt-5", "ollama:llama3.2")
    pub async fn complete_with(
        &self,
        model_id: &str,
        request: CompletionRequest,
    ) -> LlmResult<(String, CompletionResponse)> {
        let parts: Vec<&str> = model_id.splitn(2, ':').collect();
        if parts.len() != 2 {
            return Err(LlmError::ConfigError(
                "Invalid model ID format, expected 'provider:model'".to_string(),
            ));
        }
        let (provider_name, model_name) = (parts[0], parts[1]);

        let provider = self
            .providers
            .iter()
            .find(|p| p.name() == provider_name)
            .ok_or_else(|| {
                LlmError::ConfigError(format!("Provider '{}' not configured", provider_name))
            })?;

        let request_with_override = CompletionRequest {
            model_override: Some(model_name.to_string()),
            ..request
        };

        let response = provider.complete(request_with_override).await?;
        Ok((provider_name.to_string(), response))
    }
}

/// Configuration for LLM providers
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// OpenAI API key
    pub openai_api_key: Option<String>,
    /// OpenAI model to use
    pub openai_model: String,
    /// Ollama base URL
    pub ollama_base_url: Option<String>,
    /// Ollama model to use
    pub ollama_model: String,
    /// Default timeout for LLM requests
    pub default_timeout: Duration,
    /// Default max tokens for responses
    pub default_max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            ollama_base_url: Some("http://localhost:11434".to_string()),
            ollama_model: "llama3.2".to_string(),
            default_timeout: Duration::from_secs(30),
            default_max_tokens: 300,
        }
    }
}

impl LlmConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let openai_api_key = std::env::var("OPENAI_API_KEY").ok().and_then(|key| {
            let trimmed = key.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        });

        let openai_model = std::env::var("OPENAI_MODEL")
            .ok()
            .and_then(|model| {
                let trimmed = model.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| "gpt-4o-mini".to_string());

        let ollama_base_url = match std::env::var("OLLAMA_BASE_URL") {
            Ok(url) => {
                let trimmed = url.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Err(_) => Some("http://localhost:11434".to_string()),
        };

        let ollama_model = std::env::var("OLLAMA_MODEL")
            .ok()
            .and_then(|model| {
                let trimmed = model.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| "llama3.2".to_string());

        Self {
            openai_api_key,
            openai_model,
            ollama_base_url,
            ollama_model,
            default_timeout: std::env::var("LLM_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(30)),
            default_max_tokens: std::env::var("LLM_MAX_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(300),
        }
    }

    /// Build an LlmManager with all configured providers
    pub fn build_manager(&self) -> LlmResult<LlmManager> {
        let mut providers: Vec<Box<dyn LlmProvider>> = Vec::new();

        if let Some(api_key) = &self.openai_api_key {
            providers.push(Box::new(OpenAiProvider::new(
                api_key.clone(),
                self.openai_model.clone(),
            )));
        }

        if let Some(base_url) = &self.ollama_base_url {
            providers.push(Box::new(OllamaProvider::new(
                base_url.clone(),
                self.ollama_model.clone(),
            )));
        }

        if providers.is_empty() {
            return Err(LlmError::ConfigError(
                "No LLM providers configured. Set OPENAI_API_KEY or OLLAMA_BASE_URL".to_string(),
            ));
        }

        Ok(LlmManager::new(providers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.ollama_model, "llama3.2");
        assert_eq!(config.default_timeout, Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_blank_values() {
        std::env::set_var("OPENAI_API_KEY", "   ");
        std::env::set_var("OPENAI_MODEL", "gpt-test");
        std::env::set_var("OLLAMA_BASE_URL", "");
        std::env::remove_var("LLM_TIMEOUT");

        let config = LlmConfig::from_env();
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.openai_model, "gpt-test");
        assert_eq!(config.ollama_base_url, None);
        assert_eq!(config.default_timeout, Duration::from_secs(30));

        std::env::remove_var("OPENAI_API_KEY");
        std::env::remove_var("OPENAI_MODEL");
        std::env::remove_var("OLLAMA_BASE_URL");
    }

    #[test]
    #[serial]
    fn test_build_manager_requires_a_provider() {
        let config = LlmConfig {
            openai_api_key: None,
            ollama_base_url: None,
            ..LlmConfig::default()
        };
        assert!(matches!(
            config.build_manager(),
            Err(LlmError::ConfigError(_))
        ));

        let config = LlmConfig {
            openai_api_key: Some("sk-test".to_string()),
            ollama_base_url: None,
            ..LlmConfig::default()
        };
        let manager = config.build_manager().unwrap();
        assert_eq!(manager.providers.len(), 1);
        assert_eq!(manager.providers[0].name(), "openai");
    }

    #[tokio::test]
    async fn test_complete_with_wants_provider_colon_model() {
        let manager = LlmManager::new(Vec::new());
        let request = CompletionRequest {
            prompt: "hi".to_string(),
            max_tokens: None,
            timeout: Duration::from_secs(1),
            model_override: None,
        };

        let err = manager
            .complete_with("not-a-model-id", request.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::ConfigError(_)));

        let err = manager
            .complete_with("openai:gpt-4o", request)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::ConfigError(_)));
    }
}
