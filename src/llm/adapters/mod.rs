pub mod factory;
pub mod gemini;
pub mod gemini_parse;
pub mod ollama;
pub mod ollama_parse;
pub mod openai;
pub mod openai_parse;
pub mod stub;
pub mod transport;
pub mod transport_fake;
pub mod transport_reqwest;
pub mod transport_types;

// Re-export common types
pub use factory::{create_adapter, resolve_env_var};
pub use transport::{AdapterError, SyncTransport, Transport};

use crate::llm::types::Completion;

/// LLM adapter trait
///
/// All providers implement this trait.
/// The analysis pipeline calls adapters through this uniform interface.
pub trait LlmAdapter: Send + Sync {
    /// Generate a completion from a single prompt (non-streaming)
    fn generate(&self, prompt: &str) -> Result<Completion, AdapterError>;

    /// Get provider name for logging
    fn provider_name(&self) -> &str;
}

impl<T: LlmAdapter + ?Sized> LlmAdapter for &T {
    fn generate(&self, prompt: &str) -> Result<Completion, AdapterError> {
        (**self).generate(prompt)
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}

/// Concrete adapter type for all providers
///
/// This enum wraps all adapter types, implementing LlmAdapter via delegation.
#[derive(Debug)]
pub enum Adapter {
    Gemini(gemini::GeminiAdapter),
    OpenAi(openai::OpenAiAdapter),
    Ollama(ollama::OllamaAdapter),
    Stub(stub::StubAdapter),
}

impl LlmAdapter for Adapter {
    fn generate(&self, prompt: &str) -> Result<Completion, AdapterError> {
        match self {
            Adapter::Gemini(a) => a.generate(prompt),
            Adapter::OpenAi(a) => a.generate(prompt),
            Adapter::Ollama(a) => a.generate(prompt),
            Adapter::Stub(a) => a.generate(prompt),
        }
    }

    fn provider_name(&self) -> &str {
        match self {
            Adapter::Gemini(a) => a.provider_name(),
            Adapter::OpenAi(a) => a.provider_name(),
            Adapter::Ollama(a) => a.provider_name(),
            Adapter::Stub(a) => a.provider_name(),
        }
    }
}
