//! The reminder-dispatch core.
//!
//! - **window**: derives the four exact reminder dates from "today"
//! - **urgency**: maps days-until-expiry to a presentation tier
//! - **composer**: renders one (document, tier) pair into an email
//! - **dispatcher**: fans out resolve/compose/send across matched documents

pub mod composer;
pub mod dispatcher;
pub mod urgency;
pub mod window;

pub use composer::compose_reminder;
pub use dispatcher::ReminderDispatcher;
pub use urgency::UrgencyTier;
pub use window::ReminderWindow;
