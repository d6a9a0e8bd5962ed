//! Gemini response parsing
//!
//! Public functions for parsing `generateContent` and `embedContent` JSON.

use crate::llm::adapters::AdapterError;
use crate::llm::types::Completion;
use serde_json::Value as JsonValue;

/// Map a Gemini `error` object to a provider error
fn provider_error(json: &JsonValue) -> Option<AdapterError> {
    let error = json.get("error")?;
    let code = error
        .get("status")
        .and_then(|s| s.as_str())
        .map(str::to_string)
        .or_else(|| error.get("code").map(|c| c.to_string()))
        .unwrap_or_else(|| "UNKNOWN".to_string());
    let message = error
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("no message")
        .to_string();
    Some(AdapterError::Provider { code, message })
}

/// Parse a Gemini `generateContent` JSON response
///
/// Text comes from `candidates[0].content.parts[*].text`. A reply without
/// usable text (blocked prompt, safety stop) is an error, matching the
/// provider SDKs which refuse to produce text in that case.
pub fn parse_generate_content(response: &str) -> Result<Completion, AdapterError> {
    let json: JsonValue = serde_json::from_str(response)?;

    if let Some(err) = provider_error(&json) {
        return Err(err);
    }

    let Some(candidate) = json["candidates"].get(0) else {
        if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
            return Err(AdapterError::Provider {
                code: "BLOCKED".to_string(),
                message: format!("prompt blocked: {}", reason),
            });
        }
        return Err(AdapterError::InvalidResponse(
            "Missing candidates[0]".to_string(),
        ));
    };

    let parts: Vec<String> = candidate["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if parts.is_empty() {
        let reason = candidate["finishReason"].as_str().unwrap_or("UNKNOWN");
        return Err(AdapterError::InvalidResponse(format!(
            "Candidate has no text parts (finishReason: {})",
            reason
        )));
    }

    Ok(Completion::from_parts(parts))
}

/// Parse a Gemini `embedContent` JSON response into a vector
pub fn parse_embed_content(response: &str) -> Result<Vec<f32>, AdapterError> {
    let json: JsonValue = serde_json::from_str(response)?;

    if let Some(err) = provider_error(&json) {
        return Err(err);
    }

    let values = json["embedding"]["values"].as_array().ok_or_else(|| {
        AdapterError::InvalidResponse("Missing embedding.values".to_string())
    })?;

    values
        .iter()
        .map(|v| {
            v.as_f64().map(|f| f as f32).ok_or_else(|| {
                AdapterError::InvalidResponse("Non-numeric embedding value".to_string())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_content_valid() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Summary: a"}],"role":"model"},"finishReason":"STOP"}]}"#;
        let completion = parse_generate_content(json).unwrap();
        assert_eq!(completion.content(), "Summary: a");
        assert_eq!(completion.parts, vec!["Summary: a".to_string()]);
    }

    #[test]
    fn test_parse_generate_content_multiple_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Summary: a\n"},{"text":"Issue: b"}]}}]}"#;
        let completion = parse_generate_content(json).unwrap();
        assert_eq!(completion.content(), "Summary: a\nIssue: b");
    }

    #[test]
    fn test_parse_generate_content_blocked() {
        let json = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let err = parse_generate_content(json).unwrap_err();
        assert!(matches!(err, AdapterError::Provider { ref code, .. } if code == "BLOCKED"));
    }

    #[test]
    fn test_parse_generate_content_no_parts() {
        let json = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        let err = parse_generate_content(json).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_parse_generate_content_error_object() {
        let json = r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = parse_generate_content(json).unwrap_err();
        assert_eq!(
            err,
            AdapterError::Provider {
                code: "RESOURCE_EXHAUSTED".to_string(),
                message: "Resource has been exhausted".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_generate_content_malformed_json() {
        assert!(matches!(
            parse_generate_content("not json"),
            Err(AdapterError::Json(_))
        ));
    }

    #[test]
    fn test_parse_embed_content() {
        let json = r#"{"embedding":{"values":[0.5,-0.25,1]}}"#;
        assert_eq!(parse_embed_content(json).unwrap(), vec![0.5, -0.25, 1.0]);
    }

    #[test]
    fn test_parse_embed_content_missing() {
        assert!(parse_embed_content("{}").is_err());
    }
}
