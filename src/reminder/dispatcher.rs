//! Dispatch orchestration: one run per scheduled trigger.
//!
//! A run computes the reminder window, queries matched documents, then fans
//! out one independent pipeline per document (resolve owner email, classify
//! urgency, compose, send). Pipelines settle to outcomes; the aggregate is
//! produced only after every pipeline has settled. Item-level failures never
//! abort the batch; only configuration and query failures abort the run.

use crate::error::{DispatchError, DispatchResult};
use crate::metrics::Metrics;
use crate::models::{DispatchOutcome, DispatchSummary, Document};
use crate::reminder::{compose_reminder, ReminderWindow, UrgencyTier};
use crate::repositories::{EmailResolver, ExpiringDocuments, Mailer};
use chrono::{NaiveDate, Utc};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Orchestrates one reminder-dispatch run.
///
/// Holds no mutable state between runs; nothing is persisted, so a run killed
/// mid-flight leaves nothing behind. Re-running on the same calendar day
/// sends again for the same documents: idempotence lives in the data layer's
/// exact-date match, not in a send log.
pub struct ReminderDispatcher {
    documents: Arc<dyn ExpiringDocuments>,
    resolver: Arc<dyn EmailResolver>,

    /// None when send credentials are missing; every run then fails with a
    /// configuration error before any document is processed.
    mailer: Option<Arc<dyn Mailer>>,

    /// Call-to-action base link for composed emails
    app_url: Option<String>,

    /// Sender identity for composed emails
    mail_from: String,

    /// Upper bound on per-document pipelines in flight at once
    send_concurrency: usize,

    metrics: Metrics,
}

impl ReminderDispatcher {
    /// Create a new dispatcher.
    pub fn new(
        documents: Arc<dyn ExpiringDocuments>,
        resolver: Arc<dyn EmailResolver>,
        mailer: Option<Arc<dyn Mailer>>,
        app_url: Option<String>,
        mail_from: String,
        send_concurrency: usize,
    ) -> Self {
        Self {
            documents,
            resolver,
            mailer,
            app_url,
            mail_from,
            send_concurrency: send_concurrency.max(1),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Run a dispatch for the current UTC calendar day.
    pub async fn run(&self) -> DispatchResult<DispatchSummary> {
        self.run_for_date(Utc::now().date_naive()).await
    }

    /// Run a dispatch treating `today` as the current calendar day.
    pub async fn run_for_date(&self, today: NaiveDate) -> DispatchResult<DispatchSummary> {
        let mailer = self.mailer.clone().ok_or_else(|| {
            DispatchError::Configuration(
                "RESEND_API_KEY is not configured; cannot send reminders".to_string(),
            )
        })?;

        let window = ReminderWindow::compute(today);
        let documents = self.documents.find_expiring(&window).await?;

        info!("Found {} documents needing reminders", documents.len());

        // Settle-all join: every pipeline resolves to an outcome, so one
        // failure can never short-circuit the rest of the batch.
        let outcomes: Vec<DispatchOutcome> = stream::iter(documents)
            .map(|document| {
                let mailer = mailer.clone();
                async move { self.process_document(document, today, mailer).await }
            })
            .buffer_unordered(self.send_concurrency)
            .collect()
            .await;

        let summary = DispatchSummary::from_outcomes(outcomes);
        info!("{}", summary.message());
        Ok(summary)
    }

    /// One per-document pipeline: resolve, classify, compose, send.
    ///
    /// Always settles to an outcome; errors are recorded, never propagated.
    async fn process_document(
        &self,
        document: Document,
        today: NaiveDate,
        mailer: Arc<dyn Mailer>,
    ) -> DispatchOutcome {
        let email = match self.resolver.resolve(&document.owner_id).await {
            Ok(email) => email,
            Err(e) => {
                warn!(
                    "Skipping document {} ({}): {}",
                    document.id, document.name, e
                );
                self.metrics.record_email_failed();
                return DispatchOutcome::failed(&document, e.to_string());
            }
        };

        let days_until_expiry = document.days_until(today);
        let tier = UrgencyTier::classify(days_until_expiry);

        debug!(
            "Document {} expires in {} days, tier {}",
            document.id,
            days_until_expiry,
            tier.label()
        );

        let message = compose_reminder(
            &email,
            &document,
            days_until_expiry,
            tier,
            self.app_url.as_deref(),
            &self.mail_from,
        );

        match mailer.send(&message).await {
            Ok(receipt) => {
                debug!(
                    "Reminder for document {} accepted as {}",
                    document.id, receipt.message_id
                );
                self.metrics.record_email_sent();
                DispatchOutcome::sent(&document, receipt.message_id)
            }
            Err(e) => {
                warn!("Send failed for document {}: {}", document.id, e);
                self.metrics.record_email_failed();
                DispatchOutcome::failed(&document, e.to_string())
            }
        }
    }
}
