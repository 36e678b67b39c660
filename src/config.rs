//! Configuration management for the DocReminder dispatch service.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honored when present but never required.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default call-to-action link used when `APP_URL` is not configured.
pub const DEFAULT_APP_URL: &str = "https://your-app.com";

/// Default sender identity for reminder emails.
pub const DEFAULT_MAIL_FROM: &str = "DocReminder <onboarding@resend.dev>";

/// Configuration for the DocReminder dispatch service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store base URL
    pub supabase_url: String,

    /// Service-role key for the document store (query + RPC access)
    pub supabase_service_role_key: String,

    /// Email provider API key.
    ///
    /// Absence is not a startup error: the service still comes up, but every
    /// dispatch run fails with a configuration error until the key is set.
    pub resend_api_key: Option<String>,

    /// Application base URL for the call-to-action link (default placeholder
    /// is substituted at compose time when unset)
    pub app_url: Option<String>,

    /// Sender identity for outgoing reminders
    pub mail_from: String,

    /// Listen address for the HTTP trigger (default: "0.0.0.0:8787")
    pub bind_addr: String,

    /// Outbound HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Maximum number of per-document send pipelines in flight (default: 8)
    pub send_concurrency: usize,

    /// Log level fallback when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `SUPABASE_URL`: Base URL for the document store
    /// - `SUPABASE_SERVICE_ROLE_KEY`: Service-role key for store access
    ///
    /// Optional environment variables:
    /// - `RESEND_API_KEY`: Email provider credentials
    /// - `APP_URL`: Application base URL for email links
    /// - `MAIL_FROM`: Sender identity (default: DocReminder onboarding address)
    /// - `BIND_ADDR`: HTTP listen address (default: 0.0.0.0:8787)
    /// - `REQUEST_TIMEOUT`: Outbound HTTP timeout in seconds (default: 10)
    /// - `SEND_CONCURRENCY`: Fan-out width (default: 8, must be >= 1)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let supabase_url = env::var("SUPABASE_URL")
            .map_err(|_| ConfigError::MissingVar("SUPABASE_URL".to_string()))?;

        let supabase_service_role_key = env::var("SUPABASE_SERVICE_ROLE_KEY")
            .map_err(|_| ConfigError::MissingVar("SUPABASE_SERVICE_ROLE_KEY".to_string()))?;

        if !supabase_url.starts_with("http://") && !supabase_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "SUPABASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if supabase_service_role_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SUPABASE_SERVICE_ROLE_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        // An empty key is treated the same as an absent one
        let resend_api_key = env::var("RESEND_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let app_url = env::var("APP_URL").ok().filter(|u| !u.trim().is_empty());

        let mail_from = env::var("MAIL_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let send_concurrency = Self::parse_env_usize("SEND_CONCURRENCY", 8)?;

        if send_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SEND_CONCURRENCY".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            supabase_url,
            supabase_service_role_key,
            resend_api_key,
            app_url,
            mail_from,
            bind_addr,
            request_timeout,
            send_concurrency,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            supabase_url: String::new(),
            supabase_service_role_key: String::new(),
            resend_api_key: None,
            app_url: None,
            mail_from: DEFAULT_MAIL_FROM.to_string(),
            bind_addr: "0.0.0.0:8787".to_string(),
            request_timeout: 10,
            send_concurrency: 8,
            log_level: "info".to_string(),
        }
    }
}
