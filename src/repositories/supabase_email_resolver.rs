use crate::client::AsyncStoreClient;
use crate::domain::{EmailAddress, OwnerId};
use crate::error::ResolutionError;
use crate::repositories::traits::EmailResolver;
use async_trait::async_trait;
use std::sync::Arc;

/// Owner-email resolver backed by the store-side `get_user_email` RPC.
///
/// The three failure shapes stay distinct: the lookup erroring, the account
/// having no email, and the stored value not being a usable address.
pub struct SupabaseEmailResolver {
    client: Arc<dyn AsyncStoreClient>,
}

impl SupabaseEmailResolver {
    /// Create a new resolver with the given client.
    pub fn new(client: Arc<dyn AsyncStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmailResolver for SupabaseEmailResolver {
    async fn resolve(&self, owner: &OwnerId) -> Result<EmailAddress, ResolutionError> {
        let email = self
            .client
            .get_owner_email(owner.as_str())
            .await
            .map_err(|source| ResolutionError::Lookup {
                owner: owner.to_string(),
                source,
            })?
            .ok_or_else(|| ResolutionError::NoEmail(owner.to_string()))?;

        EmailAddress::new(email).map_err(|e| ResolutionError::InvalidEmail {
            owner: owner.to_string(),
            reason: e.to_string(),
        })
    }
}
