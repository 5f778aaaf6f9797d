pub mod form_controller;
pub mod form_validator;
pub mod notification_manager;

pub use form_controller::{BeginSubmit, FormController, SubmitOutcome};
pub use form_validator::FormValidator;
pub use notification_manager::NotificationManager;
