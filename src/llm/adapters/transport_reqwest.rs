//! Real HTTP transport using reqwest
//!
//! Blocking HTTP client shared by generation and embedding adapters.

use crate::llm::adapters::transport_types::{AdapterError, SyncTransport};
use reqwest::blocking::Client;
use reqwest::header::RETRY_AFTER;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Real HTTP transport using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    /// Timeout in seconds for requests
    timeout: u64,
}

impl ReqwestTransport {
    /// Create new transport with default timeout (60s)
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create transport with custom timeout
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            timeout: timeout_secs,
        }
    }

    /// Request timeout in seconds
    pub fn timeout_secs(&self) -> u64 {
        self.timeout
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, AdapterError> {
        debug!(
            url = %redact_query(url),
            timeout_secs = self.timeout,
            body_len = body.len(),
            "POST"
        );

        let mut request = self
            .client
            .post(url)
            .timeout(Duration::from_secs(self.timeout))
            .body(body.to_string());

        for (key, value) in headers {
            request = request.header(*key, *value);
        }

        let response = request.send()?;
        let status = response.status();
        debug!(status = status.as_u16(), "response");

        // Map specific error codes before the generic ones
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = response.text().unwrap_or_default();
            return Err(AdapterError::Authentication(format!(
                "HTTP {}: {}",
                status.as_u16(),
                message.trim()
            )));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .map(|v| format!(" (retry after {}s)", v))
                .unwrap_or_default();
            return Err(AdapterError::RateLimited { retry_after });
        }
        if status.is_client_error() || status.is_server_error() {
            let message = response.text().unwrap_or_default();
            return Err(AdapterError::Http {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        Ok(response.text()?)
    }
}

/// Strip the query string so API keys never reach the log
fn redact_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        assert_eq!(ReqwestTransport::new().timeout_secs(), DEFAULT_TIMEOUT_SECS);
        assert_eq!(ReqwestTransport::with_timeout(5).timeout_secs(), 5);
    }

    #[test]
    fn test_redact_query() {
        assert_eq!(
            redact_query("https://host/v1/models/m:generateContent?key=secret"),
            "https://host/v1/models/m:generateContent"
        );
        assert_eq!(redact_query("http://127.0.0.1:11434/api/chat"), "http://127.0.0.1:11434/api/chat");
    }

    #[test]
    fn test_connection_refused_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let transport = ReqwestTransport::with_timeout(2);
        let result = transport.post_json("http://127.0.0.1:9/none", &[], "{}");
        assert!(matches!(result, Err(AdapterError::Network(_))));
    }
}
