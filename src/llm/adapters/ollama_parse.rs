//! Ollama response parsing
//!
//! Public functions for parsing Ollama JSON responses.

use crate::llm::adapters::AdapterError;
use crate::llm::types::Completion;
use serde_json::Value as JsonValue;

/// Ollama reports failures as `{"error": "..."}`
fn provider_error(json: &JsonValue) -> Option<AdapterError> {
    let message = json.get("error")?.as_str()?;
    Some(AdapterError::Provider {
        code: "ollama".to_string(),
        message: message.to_string(),
    })
}

/// Parse Ollama chat completion JSON response
///
/// Public function for testing.
pub fn parse_chat_completion(response: &str) -> Result<Completion, AdapterError> {
    let json: JsonValue = serde_json::from_str(response)?;

    if let Some(err) = provider_error(&json) {
        return Err(err);
    }

    let content = json
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| AdapterError::InvalidResponse("Missing message.content".to_string()))?;

    Ok(Completion::from_text(content))
}

/// Parse Ollama `/api/embeddings` JSON response
pub fn parse_embedding(response: &str) -> Result<Vec<f32>, AdapterError> {
    let json: JsonValue = serde_json::from_str(response)?;

    if let Some(err) = provider_error(&json) {
        return Err(err);
    }

    let values = json
        .get("embedding")
        .and_then(|e| e.as_array())
        .ok_or_else(|| AdapterError::InvalidResponse("Missing embedding".to_string()))?;

    values
        .iter()
        .map(|v| {
            v.as_f64().map(|f| f as f32).ok_or_else(|| {
                AdapterError::InvalidResponse("Non-numeric embedding value".to_string())
            })
        })
        .collect()
}
