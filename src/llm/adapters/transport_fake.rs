//! Fake transport for testing
//!
//! Uses fixture strings instead of real HTTP calls.

use crate::llm::adapters::transport_types::{AdapterError, SyncTransport};
use std::sync::Mutex;

/// One request seen by the fake transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Fake transport for testing (uses fixture strings)
#[derive(Debug)]
pub struct FakeTransport {
    /// Response body to return
    pub response_body: String,
    /// Error to return (if set)
    pub error: Option<AdapterError>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    /// Create fake transport with given response
    pub fn new(response: &str) -> Self {
        Self {
            response_body: response.to_string(),
            error: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create fake transport that returns a network error
    pub fn with_error(msg: &str) -> Self {
        Self::failing(AdapterError::Network(msg.to_string()))
    }

    /// Create fake transport that returns the given error
    pub fn failing(error: AdapterError) -> Self {
        Self {
            response_body: String::new(),
            error: Some(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }
}

impl SyncTransport for FakeTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, AdapterError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                url: url.to_string(),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                body: body.to_string(),
            });
        }

        if let Some(ref err) = self.error {
            return Err(err.clone());
        }
        Ok(self.response_body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_transport_basic() {
        let transport = FakeTransport::new("test response");
        let result = transport.post_json("http://test", &[], "{}");
        assert_eq!(result.unwrap(), "test response");
    }

    #[test]
    fn test_fake_transport_with_error() {
        let transport = FakeTransport::with_error("test error");
        let result = transport.post_json("http://test", &[], "{}");
        assert_eq!(result, Err(AdapterError::Network("test error".to_string())));
    }

    #[test]
    fn test_fake_transport_records_requests() {
        let transport = FakeTransport::new("ok");
        transport
            .post_json("http://a", &[("Content-Type", "application/json")], "{\"n\":1}")
            .unwrap();
        transport.post_json("http://b", &[], "{\"n\":2}").unwrap();

        assert_eq!(transport.requests().len(), 2);
        let last = transport.last_request().unwrap();
        assert_eq!(last.url, "http://b");
        assert_eq!(last.body, "{\"n\":2}");
    }

    #[test]
    fn test_adapter_error_display() {
        let err = AdapterError::Network("test".to_string());
        assert_eq!(format!("{}", err), "Network error: test");

        let err = AdapterError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(format!("{}", err), "HTTP error 404: not found");

        let err = AdapterError::RateLimited {
            retry_after: " (retry after 60s)".to_string(),
        };
        assert!(format!("{}", err).contains("Rate limited"));
        assert!(format!("{}", err).contains("60s"));
    }
}
