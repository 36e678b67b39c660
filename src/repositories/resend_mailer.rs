use crate::client::ResendClient;
use crate::error::SendError;
use crate::models::{EmailMessage, SendReceipt};
use crate::repositories::traits::Mailer;
use async_trait::async_trait;
use std::sync::Arc;

/// Mailer backed by the synchronous ResendClient.
///
/// Sends run on the blocking thread pool so concurrent pipelines never stall
/// the async runtime.
pub struct ResendMailer {
    client: Arc<ResendClient>,
}

impl ResendMailer {
    /// Create a new mailer with the given client.
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, SendError> {
        let client = self.client.clone();
        let message = message.clone();

        tokio::task::spawn_blocking(move || client.send(&message))
            .await
            .map_err(|e| SendError::Http(format!("Task join error: {}", e)))?
    }
}
