//! Error types for the DocReminder dispatch service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Stage-level errors (configuration, query) abort a dispatch run; item-level errors
//! (resolution, send) are converted into per-document outcomes and never propagated.

use thiserror::Error;

/// Errors that can occur when talking to the document store's REST API.
#[derive(Error, Debug)]
pub enum StoreApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Generic API error with context
    #[error("API error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Failure of the expiring-document query.
///
/// Fatal to the whole run: no rows are known yet, so there is nothing to
/// record per-document outcomes against.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The store rejected or failed the matching query
    #[error("Expiring-document query failed: {0}")]
    Store(#[from] StoreApiError),
}

/// Failure to resolve one owner's contact email.
///
/// Local to a single document; the affected document is recorded as failed
/// and the run continues.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The owner has no resolvable email address
    #[error("No email found for owner {0}")]
    NoEmail(String),

    /// The lookup itself errored
    #[error("Email lookup failed for owner {owner}: {source}")]
    Lookup {
        owner: String,
        #[source]
        source: StoreApiError,
    },

    /// The lookup returned something that is not an email address
    #[error("Invalid email for owner {owner}: {reason}")]
    InvalidEmail { owner: String, reason: String },
}

/// Failure to deliver one message through the email provider.
///
/// Local to a single document; the provider's error text is retained in the
/// recorded outcome.
#[derive(Error, Debug)]
pub enum SendError {
    /// The provider rejected the message
    #[error("Email provider error (status {status}): {message}")]
    Provider { status: u16, message: String },

    /// Transport-level failure before the provider answered
    #[error("Email send failed: {0}")]
    Http(String),

    /// Network timeout
    #[error("Email send timed out")]
    Timeout,

    /// The provider's response could not be parsed
    #[error("Invalid provider response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Run-level failures of the dispatch orchestrator.
///
/// These are the only errors the HTTP trigger surfaces as a 500; everything
/// else settles into per-document outcomes inside the 200 summary.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Send-provider credentials are missing; no documents are processed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The matching query failed; no per-document outcomes exist
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Convenience type alias for Results with StoreApiError
pub type StoreApiResult<T> = Result<T, StoreApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with DispatchError
pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreApiError::NotFound("documents".to_string());
        assert_eq!(err.to_string(), "Resource not found: documents");

        let err = ConfigError::MissingVar("SUPABASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: SUPABASE_URL"
        );

        let err = ResolutionError::NoEmail("owner-1".to_string());
        assert_eq!(err.to_string(), "No email found for owner owner-1");

        let err = SendError::Timeout;
        assert_eq!(err.to_string(), "Email send timed out");
    }

    #[test]
    fn test_query_error_wraps_store_error() {
        let err = QueryError::from(StoreApiError::Timeout);
        assert!(err.to_string().contains("query failed"));

        let dispatch = DispatchError::from(err);
        assert!(matches!(dispatch, DispatchError::Query(_)));
    }

    #[test]
    fn test_send_error_retains_provider_text() {
        let err = SendError::Provider {
            status: 422,
            message: "invalid `from` field".to_string(),
        };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("invalid `from` field"));
    }
}
