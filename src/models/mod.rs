//! Data structures for documents, email messages, and dispatch outcomes.

pub mod document;
pub mod message;
pub mod outcome;

pub use document::{Document, DocumentType};
pub use message::{EmailMessage, SendReceipt};
pub use outcome::{DispatchOutcome, DispatchStatus, DispatchSummary};
