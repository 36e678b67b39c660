//! HTTP clients for the document store and the email provider.
//!
//! Both clients are synchronous (`ureq`) and are used from async contexts via
//! `tokio::task::spawn_blocking`. The store client speaks the PostgREST-style
//! REST surface of the managed database; the Resend client speaks the email
//! provider's `/emails` endpoint.

mod async_wrapper;
mod resend;

pub use async_wrapper::{AsyncStoreClient, AsyncStoreClientImpl};
pub use resend::ResendClient;

use crate::config::Config;
use crate::error::{StoreApiError, StoreApiResult};
use crate::metrics::Metrics;
use crate::models::Document;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Columns selected by the expiring-document query.
const DOCUMENT_COLUMNS: &str = "id,user_id,type,name,expiry_date";

/// HTTP client for the managed document store.
///
/// Uses the service-role key, so it sees documents across all owners. The
/// dispatch service only ever reads; inserts and deletes belong to the
/// application UI and use per-user credentials instead.
#[derive(Clone)]
pub struct StoreClient {
    /// Store base URL
    base_url: String,

    /// Service-role key, sent as both `apikey` and bearer token
    service_role_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl StoreClient {
    /// Create a new StoreClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.supabase_url.clone(),
            service_role_key: config.supabase_service_role_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a StoreClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, service_role_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            service_role_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, StoreApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("apikey", &self.service_role_key)
            .set("Authorization", &format!("Bearer {}", self.service_role_key))
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, StoreApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("apikey", &self.service_role_key)
            .set("Authorization", &format!("Bearer {}", self.service_role_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Map a ureq error to a StoreApiError.
    fn map_error(&self, error: ureq::Error) -> StoreApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => StoreApiError::Unauthorized,
                    404 => StoreApiError::NotFound(message),
                    429 => StoreApiError::RateLimitExceeded,
                    _ => StoreApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    StoreApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    StoreApiError::Timeout
                } else {
                    StoreApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Get all documents whose expiry date equals one of the given ISO dates.
    ///
    /// PostgREST set-membership filter: `expiry_date=in.(d1,d2,d3,d4)`.
    /// Exact equality, not a range; a date one day off matches nothing.
    pub fn find_documents_expiring_on(&self, dates: &[String]) -> StoreApiResult<Vec<Document>> {
        let path = format!(
            "/rest/v1/documents?select={}&expiry_date=in.({})",
            DOCUMENT_COLUMNS,
            dates.join(",")
        );
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| StoreApiError::HttpError(e.to_string()))?;

        let documents: Vec<Document> =
            serde_json::from_str(&body).map_err(StoreApiError::JsonError)?;

        self.metrics.record_documents_matched(documents.len());
        Ok(documents)
    }

    /// Look up an owner's email via the store-side RPC.
    ///
    /// The function returns a JSON string, or null when the account has no
    /// email on file; null maps to `Ok(None)` so the caller can distinguish
    /// not-found from lookup failure.
    pub fn get_owner_email(&self, owner_id: &str) -> StoreApiResult<Option<String>> {
        let body = serde_json::json!({ "user_uuid": owner_id });
        let response = self.post("/rest/v1/rpc/get_user_email", &body)?;
        let response_body = response
            .into_string()
            .map_err(|e| StoreApiError::HttpError(e.to_string()))?;

        let email: Option<String> =
            serde_json::from_str(&response_body).map_err(StoreApiError::JsonError)?;

        Ok(email.filter(|e| !e.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = StoreClient::with_base_url(
            "https://project.supabase.co".to_string(),
            "test-key".to_string(),
        );

        assert_eq!(
            client.build_url("/rest/v1/documents"),
            "https://project.supabase.co/rest/v1/documents"
        );

        assert_eq!(
            client.build_url("rest/v1/documents"),
            "https://project.supabase.co/rest/v1/documents"
        );

        let client_with_slash = StoreClient::with_base_url(
            "https://project.supabase.co/".to_string(),
            "test-key".to_string(),
        );

        assert_eq!(
            client_with_slash.build_url("/rest/v1/documents"),
            "https://project.supabase.co/rest/v1/documents"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            supabase_url: "https://project.supabase.co".to_string(),
            supabase_service_role_key: "service-key-123".to_string(),
            ..Config::default()
        };

        let client = StoreClient::new(&config);
        assert_eq!(client.base_url, "https://project.supabase.co");
        assert_eq!(client.service_role_key, "service-key-123");
    }
}
