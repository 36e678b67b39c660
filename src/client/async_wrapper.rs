//! Async wrapper around the synchronous StoreClient.
//!
//! Runs HTTP operations on the blocking thread pool via
//! `tokio::task::spawn_blocking`, preventing the async runtime from stalling
//! on synchronous I/O.

use crate::client::StoreClient;
use crate::error::{StoreApiError, StoreApiResult};
use crate::models::Document;
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the document store.
///
/// The two operations the dispatch core needs: the boundary-matching query
/// and the owner-email RPC. Trait object so repositories can be backed by a
/// mock in tests.
#[async_trait]
pub trait AsyncStoreClient: Send + Sync {
    /// Documents whose expiry date equals one of the given ISO dates.
    async fn find_documents_expiring_on(&self, dates: &[String]) -> StoreApiResult<Vec<Document>>;

    /// Owner email, or None when the account has no email on file.
    async fn get_owner_email(&self, owner_id: &str) -> StoreApiResult<Option<String>>;
}

/// Async wrapper around the synchronous StoreClient.
#[derive(Clone)]
pub struct AsyncStoreClientImpl {
    client: Arc<StoreClient>,
}

impl AsyncStoreClientImpl {
    pub fn new(client: StoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncStoreClient for AsyncStoreClientImpl {
    async fn find_documents_expiring_on(&self, dates: &[String]) -> StoreApiResult<Vec<Document>> {
        let client = self.client.clone();
        let dates = dates.to_vec();

        tokio::task::spawn_blocking(move || client.find_documents_expiring_on(&dates))
            .await
            .map_err(|e| StoreApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_owner_email(&self, owner_id: &str) -> StoreApiResult<Option<String>> {
        let client = self.client.clone();
        let owner_id = owner_id.to_string();

        tokio::task::spawn_blocking(move || client.get_owner_email(&owner_id))
            .await
            .map_err(|e| StoreApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
