use crate::client::AsyncStoreClient;
use crate::error::QueryError;
use crate::models::Document;
use crate::reminder::ReminderWindow;
use crate::repositories::traits::ExpiringDocuments;
use async_trait::async_trait;
use std::sync::Arc;

/// Expiring-document source backed by the managed store's REST API.
///
/// Turns a reminder window into the store's exact-match date filter and
/// delegates the request to the AsyncStoreClient.
pub struct SupabaseDocumentRepository {
    client: Arc<dyn AsyncStoreClient>,
}

impl SupabaseDocumentRepository {
    /// Create a new repository with the given client.
    pub fn new(client: Arc<dyn AsyncStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExpiringDocuments for SupabaseDocumentRepository {
    async fn find_expiring(&self, window: &ReminderWindow) -> Result<Vec<Document>, QueryError> {
        let dates = window.iso_dates();
        let documents = self.client.find_documents_expiring_on(&dates).await?;
        Ok(documents)
    }
}
