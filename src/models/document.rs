//! Document model representing an expiring record in the managed store.
//!
//! The dispatch service only ever reads documents; creation, mutation, and
//! deletion belong to the application UI and never pass through here.

use crate::domain::OwnerId;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of personal document being tracked.
///
/// The store column is a free string; the well-known values come from the
/// application's document form. Anything else is carried through verbatim so
/// a reminder can still name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentType {
    Passport,
    HealthCard,
    License,
    Insurance,
    Visa,
    /// Unrecognized type; the raw label is retained for display
    Other(String),
}

impl DocumentType {
    /// The store representation of this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Passport => "passport",
            Self::HealthCard => "healthcard",
            Self::License => "license",
            Self::Insurance => "insurance",
            Self::Visa => "visa",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for DocumentType {
    fn from(s: &str) -> Self {
        match s {
            "passport" => Self::Passport,
            "healthcard" => Self::HealthCard,
            "license" => Self::License,
            "insurance" => Self::Insurance,
            "visa" => Self::Visa,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DocumentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DocumentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(DocumentType::from(s.as_str()))
    }
}

/// A document record as returned by the store's matching query.
///
/// Field names follow the store columns (`user_id`, `type`, `expiry_date`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document
    pub id: String,

    /// Account that owns the document (store column: user_id)
    #[serde(rename = "user_id")]
    pub owner_id: OwnerId,

    /// Kind of document (store column: type)
    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    /// Display name, e.g. "Passport" or a free-text label
    pub name: String,

    /// Calendar expiry date, no time component
    pub expiry_date: NaiveDate,
}

impl Document {
    /// Signed whole-day count until expiry.
    ///
    /// Zero means the document expires today; negative means it is already
    /// overdue. Overdue values are intentionally not special-cased and fall
    /// into the most urgent reminder tier downstream.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        self.expiry_date.signed_duration_since(today).num_days()
    }
}
