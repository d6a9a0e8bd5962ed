//! Stub Adapter
//!
//! Testing adapter that returns canned replies without network calls.
//! Used for integration tests and offline runs (`provider = "stub"`).

use crate::llm::adapters::{AdapterError, LlmAdapter};
use crate::llm::types::Completion;
use std::sync::Mutex;

/// Stub adapter for testing (returns fake responses)
#[derive(Debug)]
pub struct StubAdapter {
    /// Fake response to return
    response: Completion,
    /// Prompts containing this marker fail with a network error
    fail_marker: Option<String>,
    /// Prompts seen so far
    prompts: Mutex<Vec<String>>,
}

impl StubAdapter {
    /// Create new stub adapter with default fake response
    pub fn new() -> Self {
        Self::with_completion(Completion::from_text(Self::default_response()))
    }

    /// Create stub adapter with custom response text
    pub fn with_response(response: String) -> Self {
        Self::with_completion(Completion::from_text(response))
    }

    /// Create stub adapter with a full completion (text and parts)
    pub fn with_completion(response: Completion) -> Self {
        Self {
            response,
            fail_marker: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fail every prompt that contains `marker`
    pub fn failing_when(mut self, marker: &str) -> Self {
        self.fail_marker = Some(marker.to_string());
        self
    }

    /// Prompts received so far (order of arrival)
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }

    /// Default fake analysis reply
    fn default_response() -> String {
        "Summary: Stub analysis of the submitted slow query log chunk.\n\
         Issue: Full table scan caused by a missing index.\n\
         Suggestion: CREATE INDEX idx_stub ON stub_table(stub_column);"
            .to_string()
    }
}

impl Default for StubAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmAdapter for StubAdapter {
    fn generate(&self, prompt: &str) -> Result<Completion, AdapterError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        if let Some(marker) = &self.fail_marker {
            if prompt.contains(marker.as_str()) {
                return Err(AdapterError::Network(format!(
                    "stub failure for prompt containing '{}'",
                    marker
                )));
            }
        }

        Ok(self.response.clone())
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}
