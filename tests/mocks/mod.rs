//! Hand-written mock collaborators for dispatcher and server tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use docreminder::domain::{EmailAddress, OwnerId};
use docreminder::error::{QueryError, ResolutionError, SendError, StoreApiError};
use docreminder::models::{Document, DocumentType, EmailMessage, SendReceipt};
use docreminder::reminder::ReminderWindow;
use docreminder::repositories::{EmailResolver, ExpiringDocuments, Mailer};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Build a document fixture.
#[allow(dead_code)]
pub fn sample_document(id: &str, owner: &str, name: &str, expiry: NaiveDate) -> Document {
    Document {
        id: id.to_string(),
        owner_id: OwnerId::new(owner).unwrap(),
        doc_type: DocumentType::Passport,
        name: name.to_string(),
        expiry_date: expiry,
    }
}

/// Mock expiring-document source.
#[derive(Clone, Default)]
pub struct MockDocumentSource {
    documents: Arc<Mutex<Vec<Document>>>,
    fail: Arc<Mutex<bool>>,
    last_window: Arc<Mutex<Option<[String; 4]>>>,
    call_count: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_documents(&self, docs: Vec<Document>) {
        self.documents.lock().unwrap().extend(docs);
    }

    pub fn fail_next(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn last_window(&self) -> Option<[String; 4]> {
        self.last_window.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExpiringDocuments for MockDocumentSource {
    async fn find_expiring(&self, window: &ReminderWindow) -> Result<Vec<Document>, QueryError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_window.lock().unwrap() = Some(window.iso_dates());

        if *self.fail.lock().unwrap() {
            return Err(QueryError::Store(StoreApiError::HttpError(
                "Connection failed".to_string(),
            )));
        }
        Ok(self.documents.lock().unwrap().clone())
    }
}

/// Mock owner-email resolver with per-owner entries.
#[derive(Clone, Default)]
pub struct MockEmailResolver {
    emails: Arc<Mutex<HashMap<String, String>>>,
}

#[allow(dead_code)]
impl MockEmailResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_email(&self, owner: &str, email: &str) {
        self.emails
            .lock()
            .unwrap()
            .insert(owner.to_string(), email.to_string());
    }
}

#[async_trait]
impl EmailResolver for MockEmailResolver {
    async fn resolve(&self, owner: &OwnerId) -> Result<EmailAddress, ResolutionError> {
        let emails = self.emails.lock().unwrap().clone();
        let email = emails
            .get(owner.as_str())
            .ok_or_else(|| ResolutionError::NoEmail(owner.to_string()))?;
        EmailAddress::new(email.clone()).map_err(|e| ResolutionError::InvalidEmail {
            owner: owner.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Mock mailer that records messages and can fail for chosen recipients.
///
/// An optional per-send delay plus in-flight tracking lets tests observe the
/// bounded fan-out and the settle-all join.
#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    failing_recipients: Arc<Mutex<HashSet<String>>>,
    delay: Arc<Mutex<Option<Duration>>>,
    in_flight: Arc<AtomicUsize>,
    peak_in_flight: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_for(&self, recipient: &str) {
        self.failing_recipients
            .lock()
            .unwrap()
            .insert(recipient.to_string());
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, SendError> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let recipient = message.to.first().cloned().unwrap_or_default();
        if self.failing_recipients.lock().unwrap().contains(&recipient) {
            return Err(SendError::Provider {
                status: 422,
                message: format!("rejected recipient {}", recipient),
            });
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(SendReceipt {
            message_id: format!("msg-{}", sent.len()),
        })
    }
}
