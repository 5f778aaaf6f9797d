//! Domain entities.

mod field_errors;
mod form_field;
mod membership_form;

pub use field_errors::FieldErrors;
pub use form_field::FormField;
pub use membership_form::MembershipForm;
