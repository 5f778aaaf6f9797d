//! Domain layer with core form entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Toast notifications.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{FieldErrors, FormField, MembershipForm};
pub use errors::SubmissionError;
pub use notification::{Notification, NotificationLevel};
pub use ports::{NotificationPort, SubmissionPort};
