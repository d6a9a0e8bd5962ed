//! OpenAI Adapter
//!
//! OpenAI-compatible HTTP API adapter (`/chat/completions`).

use crate::llm::adapters::transport::{SyncTransport, Transport};
use crate::llm::adapters::{AdapterError, LlmAdapter};
use crate::llm::types::Completion;

// Public parsing module (re-exported for testing)
pub use crate::llm::adapters::openai_parse::{parse_chat_completion, parse_embedding};

/// Default OpenAI API root
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible adapter
#[derive(Debug)]
pub struct OpenAiAdapter {
    /// Base URL (e.g., https://api.openai.com/v1)
    base_url: String,
    /// Model name (e.g., gpt-4o-mini)
    model: String,
    /// API key
    api_key: String,
    /// HTTP transport
    transport: Transport,
}

impl OpenAiAdapter {
    /// Create adapter over a transport
    pub fn with_transport(
        base_url: String,
        model: String,
        api_key: String,
        transport: Transport,
    ) -> Self {
        Self {
            base_url,
            model,
            api_key,
            transport,
        }
    }

    /// Get model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get transport
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Build chat request body
    fn build_request(&self, prompt: &str) -> String {
        let system = crate::llm::contracts::system_prompt();
        let messages = serde_json::json!([
            {"role": "system", "content": system},
            {"role": "user", "content": prompt}
        ]);

        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "stream": false
        })
        .to_string()
    }
}

impl LlmAdapter for OpenAiAdapter {
    fn generate(&self, prompt: &str) -> Result<Completion, AdapterError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = self.build_request(prompt);

        let auth_header = format!("Bearer {}", self.api_key);
        let headers = [
            ("Authorization", auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        let response = self.transport.post_json(&url, &headers, &body)?;
        parse_chat_completion(&response)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
