//! HTTP Transport for LLM Adapters
//!
//! Provides synchronous HTTP client.
//! Uses reqwest's blocking client.

// Import sibling modules (declared in adapters/mod.rs)
pub use crate::llm::adapters::transport_fake::{FakeTransport, RecordedRequest};
pub use crate::llm::adapters::transport_reqwest::{ReqwestTransport, DEFAULT_TIMEOUT_SECS};
pub use crate::llm::adapters::transport_types::{AdapterError, SyncTransport};

/// Concrete transport enum
///
/// Wraps all transport types so adapters stay plain structs.
#[derive(Debug)]
pub enum Transport {
    Real(ReqwestTransport),
    Fake(FakeTransport),
}

impl Transport {
    /// Real transport with the given timeout
    pub fn real(timeout_secs: u64) -> Self {
        Transport::Real(ReqwestTransport::with_timeout(timeout_secs))
    }

    /// Fake transport, if this is one (for test assertions)
    pub fn as_fake(&self) -> Option<&FakeTransport> {
        match self {
            Transport::Fake(t) => Some(t),
            Transport::Real(_) => None,
        }
    }
}

impl SyncTransport for Transport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, AdapterError> {
        match self {
            Transport::Real(t) => t.post_json(url, headers, body),
            Transport::Fake(t) => t.post_json(url, headers, body),
        }
    }
}
