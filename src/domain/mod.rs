//! Domain value objects and types.
//!
//! Type-safe wrappers for domain concepts like owner identifiers and email
//! addresses. These value objects validate at construction time and prevent
//! invalid data from being represented in the system.

pub mod email;
pub mod errors;
pub mod owner_id;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use owner_id::OwnerId;
