//! Synchronous client for the Resend email API.

use crate::error::SendError;
use crate::metrics::Metrics;
use crate::models::{EmailMessage, SendReceipt};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Production endpoint for the email provider.
const RESEND_API_BASE: &str = "https://api.resend.com";

/// HTTP client for the Resend email provider.
///
/// Synchronous like the store client; callers wrap it with
/// `tokio::task::spawn_blocking` via [`crate::repositories::ResendMailer`].
#[derive(Clone)]
pub struct ResendClient {
    /// Provider base URL
    base_url: String,

    /// API key for bearer authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ResendClient {
    /// Create a new ResendClient against the production endpoint.
    pub fn new(api_key: String, request_timeout: u64) -> Self {
        Self::with_base_url(RESEND_API_BASE.to_string(), api_key, request_timeout)
    }

    /// Create a ResendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String, request_timeout: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(request_timeout))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Deliver one rendered message.
    ///
    /// A 2xx answer carries the provider message id; any non-2xx answer keeps
    /// the provider's error body verbatim so the outcome record can surface it.
    pub fn send(&self, message: &EmailMessage) -> Result<SendReceipt, SendError> {
        let start = Instant::now();
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));

        tracing::debug!("POST {} (to: {})", url, message.to.join(", "));

        let body = serde_json::to_value(message).map_err(SendError::InvalidResponse)?;

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(&body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        let response = result?;
        let response_body = response
            .into_string()
            .map_err(|e| SendError::Http(e.to_string()))?;

        let receipt: SendReceipt =
            serde_json::from_str(&response_body).map_err(SendError::InvalidResponse)?;

        tracing::debug!("Email accepted with provider id {}", receipt.message_id);
        Ok(receipt)
    }

    /// Map a ureq error to a SendError.
    fn map_error(&self, error: ureq::Error) -> SendError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                SendError::Provider {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::Io {
                    SendError::Timeout
                } else {
                    SendError::Http(transport.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = ResendClient::new("re_test".to_string(), 10);
        assert_eq!(client.base_url, "https://api.resend.com");
    }
}
