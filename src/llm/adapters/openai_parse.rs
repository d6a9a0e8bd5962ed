//! OpenAI response parsing
//!
//! Public functions for parsing OpenAI-compatible JSON responses.

use crate::llm::adapters::AdapterError;
use crate::llm::types::Completion;
use serde_json::Value as JsonValue;

/// Map an OpenAI `error` object to a provider error
fn provider_error(json: &JsonValue) -> Option<AdapterError> {
    let error = json.get("error")?;
    let code = error
        .get("code")
        .and_then(|c| c.as_str())
        .or_else(|| error.get("type").and_then(|t| t.as_str()))
        .unwrap_or("unknown")
        .to_string();
    let message = error
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("no message")
        .to_string();
    Some(AdapterError::Provider { code, message })
}

/// Parse OpenAI chat completion JSON response
///
/// Public function for testing.
pub fn parse_chat_completion(response: &str) -> Result<Completion, AdapterError> {
    let json: JsonValue = serde_json::from_str(response)?;

    if let Some(err) = provider_error(&json) {
        return Err(err);
    }

    let content = json["choices"]
        .get(0)
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| {
            AdapterError::InvalidResponse("Missing choices[0].message.content".to_string())
        })?;

    Ok(Completion::from_text(content))
}

/// Parse OpenAI `/embeddings` JSON response
pub fn parse_embedding(response: &str) -> Result<Vec<f32>, AdapterError> {
    let json: JsonValue = serde_json::from_str(response)?;

    if let Some(err) = provider_error(&json) {
        return Err(err);
    }

    let values = json["data"]
        .get(0)
        .and_then(|d| d.get("embedding"))
        .and_then(|e| e.as_array())
        .ok_or_else(|| AdapterError::InvalidResponse("Missing data[0].embedding".to_string()))?;

    values
        .iter()
        .map(|v| {
            v.as_f64().map(|f| f as f32).ok_or_else(|| {
                AdapterError::InvalidResponse("Non-numeric embedding value".to_string())
            })
        })
        .collect()
}
