//! Adapter Factory
//!
//! Creates LLM adapter instances from configuration.

use crate::config::LlmConfig;
use crate::llm::adapters::gemini::{GeminiAdapter, GEMINI_BASE_URL, GEMINI_DEFAULT_MODEL};
use crate::llm::adapters::ollama::OllamaAdapter;
use crate::llm::adapters::openai::{OpenAiAdapter, OPENAI_BASE_URL};
use crate::llm::adapters::stub::StubAdapter;
use crate::llm::adapters::transport::Transport;
use crate::llm::adapters::{Adapter, AdapterError};
use tracing::debug;

/// Environment variable consulted when no Gemini key is configured
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable consulted when no OpenAI key is configured
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Create adapter from the `[llm]` section
pub fn create_adapter(config: &LlmConfig) -> Result<Adapter, AdapterError> {
    debug!(provider = %config.provider, "creating generation adapter");

    match config.provider.as_str() {
        "disabled" => Err(AdapterError::Configuration(
            "LLM provider is disabled".to_string(),
        )),
        "stub" => Ok(Adapter::Stub(StubAdapter::new())),
        "gemini" => Ok(Adapter::Gemini(GeminiAdapter::with_transport(
            base_url_or(config, GEMINI_BASE_URL),
            config
                .model
                .clone()
                .unwrap_or_else(|| GEMINI_DEFAULT_MODEL.to_string()),
            api_key_or_env(config, GEMINI_API_KEY_ENV)?,
            Transport::real(config.timeout_secs),
        ))),
        "openai" => Ok(Adapter::OpenAi(OpenAiAdapter::with_transport(
            base_url_or(config, OPENAI_BASE_URL),
            required_model(config)?,
            api_key_or_env(config, OPENAI_API_KEY_ENV)?,
            Transport::real(config.timeout_secs),
        ))),
        "ollama" => Ok(Adapter::Ollama(OllamaAdapter::with_transport(
            config.host.clone(),
            config.port.clone(),
            required_model(config)?,
            Transport::real(config.timeout_secs),
        ))),
        other => Err(AdapterError::Configuration(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}

/// Configured base URL or the provider default
pub(crate) fn base_url_or(config: &LlmConfig, default: &str) -> String {
    config
        .base_url
        .clone()
        .unwrap_or_else(|| default.to_string())
}

/// Model is mandatory for providers without a sensible default
pub(crate) fn required_model(config: &LlmConfig) -> Result<String, AdapterError> {
    config.model.clone().ok_or_else(|| {
        AdapterError::Configuration(format!(
            "Missing 'model' for provider '{}'",
            config.provider
        ))
    })
}

/// Configured API key (resolving `env:` references) or the fallback variable
pub(crate) fn api_key_or_env(config: &LlmConfig, fallback_env: &str) -> Result<String, AdapterError> {
    let reference = config
        .api_key
        .clone()
        .unwrap_or_else(|| format!("env:{}", fallback_env));
    let key = resolve_env_var(&reference)?;
    if key.trim().is_empty() {
        return Err(AdapterError::Configuration(format!(
            "Empty API key for provider '{}'",
            config.provider
        )));
    }
    Ok(key)
}

/// Resolve environment variable reference
///
/// If value starts with "env:", read from environment.
/// Otherwise return value as-is.
pub fn resolve_env_var(value: &str) -> Result<String, AdapterError> {
    match value.strip_prefix("env:") {
        Some(name) => std::env::var(name).map_err(|_| {
            AdapterError::Configuration(format!("Environment variable {} is not set", name))
        }),
        None => Ok(value.to_string()),
    }
}
