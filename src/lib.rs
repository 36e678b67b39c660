//! DocReminder dispatch service.
//!
//! A thin service over a managed document store and a transactional email
//! provider: once per day a scheduler triggers a run that finds documents
//! whose expiry date lands exactly on one of four reminder boundaries
//! (120/30/7/3 days out), resolves each owner's email, classifies urgency,
//! and sends a formatted reminder, tolerating partial failures across the
//! batch.
//!
//! # Architecture
//!
//! - **models**: documents, email messages, dispatch outcomes
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **domain**: validated value objects (owner ids, email addresses)
//! - **client**: HTTP clients for the document store and email provider
//! - **repositories**: trait seams over the external collaborators
//! - **reminder**: window calculation, urgency, composition, dispatch
//! - **server**: the HTTP trigger endpoint
//! - **metrics**: counters for outbound traffic and send volumes

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod reminder;
pub mod repositories;
pub mod server;

pub use client::{ResendClient, StoreClient};
pub use config::Config;
pub use error::{
    ConfigError, DispatchError, QueryError, ResolutionError, SendError, StoreApiError,
};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{
    DispatchOutcome, DispatchStatus, DispatchSummary, Document, DocumentType, EmailMessage,
    SendReceipt,
};
pub use reminder::{compose_reminder, ReminderDispatcher, ReminderWindow, UrgencyTier};
pub use server::{build_router, AppState};
