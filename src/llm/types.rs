//! LLM types: generation replies
//!
//! Providers answer either with a single text payload or with a list of
//! response parts. `Completion` carries both so callers can apply one
//! extraction policy regardless of provider.

use serde::{Deserialize, Serialize};

/// One reply from a generation service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Primary text payload (absent when the provider only returned parts)
    pub text: Option<String>,
    /// Individual response parts, in provider order
    pub parts: Vec<String>,
}

impl Completion {
    /// Reply with a primary text payload and no parts
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            parts: Vec::new(),
        }
    }

    /// Reply made of parts; the primary text is their concatenation
    pub fn from_parts(parts: Vec<String>) -> Self {
        let joined = parts.concat();
        Self {
            text: (!joined.is_empty()).then_some(joined),
            parts,
        }
    }

    /// Extracted reply text
    ///
    /// Prefers the primary text; falls back to the first part when the
    /// primary text is absent or blank. Result is trimmed.
    pub fn content(&self) -> String {
        match self.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => self
                .parts
                .first()
                .map(|part| part.trim().to_string())
                .unwrap_or_default(),
        }
    }
}
