//! Email message and receipt types matching the provider wire format.

use serde::{Deserialize, Serialize};

/// A fully rendered email ready for the send step.
///
/// The shape mirrors the provider's `POST /emails` payload:
/// `{ from, to: [string], subject, html }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailMessage {
    /// Sender identity, e.g. `DocReminder <onboarding@resend.dev>`
    pub from: String,

    /// Recipient addresses (always a single element for reminders)
    pub to: Vec<String>,

    /// Subject line
    pub subject: String,

    /// Rendered HTML body
    pub html: String,
}

/// Provider acknowledgment for an accepted message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendReceipt {
    /// Provider-assigned message id
    #[serde(rename = "id")]
    pub message_id: String,
}
