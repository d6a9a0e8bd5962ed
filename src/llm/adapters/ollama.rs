//! Ollama Adapter
//!
//! Ollama local LLM adapter (`/api/chat`, non-streaming).

use crate::llm::adapters::transport::{SyncTransport, Transport};
use crate::llm::adapters::{AdapterError, LlmAdapter};
use crate::llm::types::Completion;

// Public parsing module (re-exported for testing)
pub use crate::llm::adapters::ollama_parse::{parse_chat_completion, parse_embedding};

/// Ollama adapter (local HTTP API)
#[derive(Debug)]
pub struct OllamaAdapter {
    /// Host (e.g., 127.0.0.1)
    host: String,
    /// Port (e.g., 11434)
    port: String,
    /// Model name (e.g., llama3)
    model: String,
    /// HTTP transport
    transport: Transport,
}

impl OllamaAdapter {
    /// Create adapter over a transport
    pub fn with_transport(host: String, port: String, model: String, transport: Transport) -> Self {
        Self {
            host,
            port,
            model,
            transport,
        }
    }

    /// Build base URL
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
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

impl LlmAdapter for OllamaAdapter {
    fn generate(&self, prompt: &str) -> Result<Completion, AdapterError> {
        let url = format!("{}/api/chat", self.base_url());
        let body = self.build_request(prompt);

        let headers = [("Content-Type", "application/json")];

        let response = self.transport.post_json(&url, &headers, &body)?;
        parse_chat_completion(&response)
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::adapters::transport::FakeTransport;

    #[test]
    fn test_generate_posts_to_api_chat() {
        let adapter = OllamaAdapter::with_transport(
            "127.0.0.1".to_string(),
            "11434".to_string(),
            "llama3".to_string(),
            Transport::Fake(FakeTransport::new(
                r#"{"message":{"role":"assistant","content":"Suggestion: add a cache"},"done":true}"#,
            )),
        );

        let completion = adapter.generate("prompt").unwrap();
        assert_eq!(completion.content(), "Suggestion: add a cache");

        let request = adapter.transport().as_fake().unwrap().last_request().unwrap();
        assert_eq!(request.url, "http://127.0.0.1:11434/api/chat");
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["model"], "llama3");
        assert_eq!(body["stream"], false);
    }
}
