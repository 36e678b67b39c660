//! Per-document settlement outcomes and the run-level aggregate.
//!
//! Outcomes exist only for the duration of one dispatch run: created when a
//! send pipeline settles, folded into the summary, returned to the caller,
//! and never persisted.

use crate::models::Document;
use serde::{Deserialize, Serialize};

/// Terminal state of one per-document send pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DispatchStatus {
    /// The provider accepted the message
    Sent {
        /// Provider-assigned message id
        message_id: String,
    },
    /// Resolution or send failed; the underlying error text is retained
    Failed { error: String },
}

/// Settlement record for one matched document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchOutcome {
    /// Identifier of the matched document
    pub document_id: String,

    /// Display name of the matched document
    pub document_name: String,

    #[serde(flatten)]
    pub status: DispatchStatus,
}

impl DispatchOutcome {
    /// Record a successful send.
    pub fn sent(document: &Document, message_id: String) -> Self {
        Self {
            document_id: document.id.clone(),
            document_name: document.name.clone(),
            status: DispatchStatus::Sent { message_id },
        }
    }

    /// Record a failed resolution or send.
    pub fn failed(document: &Document, error: String) -> Self {
        Self {
            document_id: document.id.clone(),
            document_name: document.name.clone(),
            status: DispatchStatus::Failed { error },
        }
    }

    /// Whether this outcome is a successful send.
    pub fn is_sent(&self) -> bool {
        matches!(self.status, DispatchStatus::Sent { .. })
    }
}

/// Aggregate result of one dispatch run.
///
/// Failed items are always counted and itemized; a run never reports a
/// partial success that silently drops failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchSummary {
    /// Number of documents matched by the query
    pub total: usize,

    /// Number of reminders the provider accepted
    pub sent: usize,

    /// Number of documents whose pipeline failed
    pub failed: usize,

    /// Per-document settlement records
    pub results: Vec<DispatchOutcome>,
}

impl DispatchSummary {
    /// Fold settled outcomes into the aggregate.
    pub fn from_outcomes(results: Vec<DispatchOutcome>) -> Self {
        let total = results.len();
        let sent = results.iter().filter(|o| o.is_sent()).count();
        Self {
            total,
            sent,
            failed: total - sent,
            results,
        }
    }

    /// Human-readable one-line summary for the trigger response.
    pub fn message(&self) -> String {
        format!(
            "Processed {} documents. Sent: {}, Failed: {}",
            self.total, self.sent, self.failed
        )
    }
}
