//! Application layer with the form controller, services and use cases.

/// Form controller, validation and toast queue.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{BeginSubmit, FormController, FormValidator, NotificationManager, SubmitOutcome};
pub use use_cases::SubmitMembershipUseCase;
