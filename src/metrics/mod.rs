//! Basic metrics instrumentation for tracking dispatch activity.
//!
//! Provides counters and duration tracking for outbound HTTP traffic and
//! per-run reminder volumes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector shared by the store and email clients.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of outbound HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of outbound HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all outbound HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Number of documents matched by expiry queries
    documents_matched_total: Arc<AtomicU64>,

    /// Number of reminder emails the provider accepted
    emails_sent_total: Arc<AtomicU64>,

    /// Number of reminder emails that failed to send
    emails_failed_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            documents_matched_total: Arc::new(AtomicU64::new(0)),
            emails_sent_total: Arc::new(AtomicU64::new(0)),
            emails_failed_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an outbound HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an outbound HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record documents matched by an expiry query.
    pub fn record_documents_matched(&self, count: usize) {
        self.documents_matched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record an accepted reminder email.
    pub fn record_email_sent(&self) {
        self.emails_sent_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed reminder email.
    pub fn record_email_failed(&self) {
        self.emails_failed_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total outbound HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total outbound HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total outbound HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average outbound HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get total documents matched.
    pub fn documents_matched_total(&self) -> u64 {
        self.documents_matched_total.load(Ordering::Relaxed)
    }

    /// Get total emails sent.
    pub fn emails_sent_total(&self) -> u64 {
        self.emails_sent_total.load(Ordering::Relaxed)
    }

    /// Get total emails failed.
    pub fn emails_failed_total(&self) -> u64 {
        self.emails_failed_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.http_requests_total.store(0, Ordering::Relaxed);
        self.http_errors_total.store(0, Ordering::Relaxed);
        self.http_duration_total_ms.store(0, Ordering::Relaxed);
        self.documents_matched_total.store(0, Ordering::Relaxed);
        self.emails_sent_total.store(0, Ordering::Relaxed);
        self.emails_failed_total.store(0, Ordering::Relaxed);
    }

    /// Get a snapshot of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            documents_matched_total: self.documents_matched_total(),
            emails_sent_total: self.emails_sent_total(),
            emails_failed_total: self.emails_failed_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub documents_matched_total: u64,
    pub emails_sent_total: u64,
    pub emails_failed_total: u64,
}
