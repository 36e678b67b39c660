use crate::domain::{EmailAddress, OwnerId};
use crate::error::{QueryError, ResolutionError, SendError};
use crate::models::{Document, EmailMessage, SendReceipt};
use crate::reminder::ReminderWindow;
use async_trait::async_trait;

/// Source of documents whose expiry date lands on a reminder boundary.
///
/// Abstraction over the managed document store, enabling different
/// implementations (API client, mock).
#[async_trait]
pub trait ExpiringDocuments: Send + Sync {
    /// Retrieve every document, across all owners, whose expiry date equals
    /// exactly one of the window's four dates.
    ///
    /// Failure here is fatal to the run: no rows are known yet, so there is
    /// no per-document fallback.
    async fn find_expiring(&self, window: &ReminderWindow) -> Result<Vec<Document>, QueryError>;
}

/// Maps a document owner to a contact email.
///
/// Not-found is explicit at the type level rather than a nullable return;
/// either way the failure stays local to one document.
#[async_trait]
pub trait EmailResolver: Send + Sync {
    /// Resolve the owner's contact email address.
    async fn resolve(&self, owner: &OwnerId) -> Result<EmailAddress, ResolutionError>;
}

/// Outbound email delivery.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Hand a rendered message to the provider.
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, SendError>;
}
