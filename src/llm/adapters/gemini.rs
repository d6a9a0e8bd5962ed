//! Gemini Adapter
//!
//! Google Generative Language API (`generateContent`).
//! Answers arrive as candidate parts rather than a single message.

use crate::llm::adapters::transport::{SyncTransport, Transport};
use crate::llm::adapters::{AdapterError, LlmAdapter};
use crate::llm::types::Completion;

// Public parsing module (re-exported for testing)
pub use crate::llm::adapters::gemini_parse::{parse_embed_content, parse_generate_content};

/// Default Gemini API root
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini generation model
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Strip an optional `models/` prefix from a model id
pub fn normalize_model(model: &str) -> &str {
    model.strip_prefix("models/").unwrap_or(model)
}

/// Gemini adapter
#[derive(Debug)]
pub struct GeminiAdapter {
    /// Base URL (e.g., https://generativelanguage.googleapis.com/v1beta)
    base_url: String,
    /// Model name (e.g., gemini-2.0-flash)
    model: String,
    /// API key
    api_key: String,
    /// HTTP transport
    transport: Transport,
}

impl GeminiAdapter {
    /// Create adapter over a transport
    pub fn with_transport(
        base_url: String,
        model: String,
        api_key: String,
        transport: Transport,
    ) -> Self {
        Self {
            base_url,
            model: normalize_model(&model).to_string(),
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

    /// Endpoint for this model
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Build `generateContent` request body
    fn build_request(&self, prompt: &str) -> String {
        serde_json::json!({
            "contents": [
                {"role": "user", "parts": [{"text": prompt}]}
            ]
        })
        .to_string()
    }
}

impl LlmAdapter for GeminiAdapter {
    fn generate(&self, prompt: &str) -> Result<Completion, AdapterError> {
        let url = self.endpoint();
        let body = self.build_request(prompt);

        let headers = [
            ("x-goog-api-key", self.api_key.as_str()),
            ("Content-Type", "application/json"),
        ];

        let response = self.transport.post_json(&url, &headers, &body)?;
        parse_generate_content(&response)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::adapters::transport::FakeTransport;

    fn adapter_with(response: &str) -> GeminiAdapter {
        GeminiAdapter::with_transport(
            GEMINI_BASE_URL.to_string(),
            "models/gemini-2.0-flash".to_string(),
            "test-key".to_string(),
            Transport::Fake(FakeTransport::new(response)),
        )
    }

    #[test]
    fn test_model_prefix_is_stripped() {
        let adapter = adapter_with("{}");
        assert_eq!(adapter.model(), "gemini-2.0-flash");
    }

    #[test]
    fn test_generate_sends_prompt_and_key() {
        let adapter = adapter_with(
            r#"{"candidates":[{"content":{"parts":[{"text":"Summary: ok"}]}}]}"#,
        );
        let completion = adapter.generate("analyze this").unwrap();
        assert_eq!(completion.content(), "Summary: ok");

        let request = adapter.transport().as_fake().unwrap().last_request().unwrap();
        assert_eq!(
            request.url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert!(request
            .headers
            .contains(&("x-goog-api-key".to_string(), "test-key".to_string())));
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "analyze this");
    }

    #[test]
    fn test_generate_propagates_transport_error() {
        let adapter = GeminiAdapter::with_transport(
            GEMINI_BASE_URL.to_string(),
            GEMINI_DEFAULT_MODEL.to_string(),
            "k".to_string(),
            Transport::Fake(FakeTransport::with_error("connection reset")),
        );
        assert!(matches!(
            adapter.generate("x"),
            Err(AdapterError::Network(_))
        ));
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(adapter_with("{}").provider_name(), "gemini");
    }
}
