//! Field validation rules.

use crate::domain::{FieldErrors, FormField, MembershipForm};

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const YOUTUBE_NAME_REQUIRED: &str = "YouTube name is required";
pub const GMAIL_REQUIRED: &str = "Gmail address is required";
pub const GMAIL_INVALID: &str = "Please enter a valid @gmail.com address";

const GMAIL_SUFFIX: &str = "@gmail.com";

/// Stateless rule set for the membership form.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator;

impl FormValidator {
    /// Runs a full validation pass, producing messages for every failing field.
    #[must_use]
    pub fn validate(form: &MembershipForm) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in FormField::ALL {
            if let Some(message) = Self::check(field, form.get(field)) {
                errors.insert(field, message);
            }
        }
        errors
    }

    /// Checks a single field value.
    #[must_use]
    pub fn check(field: FormField, value: &str) -> Option<&'static str> {
        match field {
            FormField::FullName => value.trim().is_empty().then_some(FULL_NAME_REQUIRED),
            FormField::YoutubeName => value.trim().is_empty().then_some(YOUTUBE_NAME_REQUIRED),
            FormField::Gmail => {
                if value.trim().is_empty() {
                    Some(GMAIL_REQUIRED)
                } else if !value.ends_with(GMAIL_SUFFIX) {
                    Some(GMAIL_INVALID)
                } else {
                    None
                }
            }
            FormField::Suggestions => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn form(full_name: &str, youtube_name: &str, gmail: &str) -> MembershipForm {
        MembershipForm::new()
            .with(FormField::FullName, full_name)
            .with(FormField::YoutubeName, youtube_name)
            .with(FormField::Gmail, gmail)
    }

    #[test]
    fn test_missing_full_name() {
        let errors = FormValidator::validate(&form("", "X", "a@gmail.com"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::FullName), Some(FULL_NAME_REQUIRED));
    }

    #[test]
    fn test_wrong_domain() {
        let errors = FormValidator::validate(&form("A", "B", "a@yahoo.com"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Gmail), Some(GMAIL_INVALID));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = FormValidator::validate(&form("A", "B", "a@gmail.com"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_everything_missing() {
        let errors = FormValidator::validate(&MembershipForm::new());
        assert_eq!(errors.get(FormField::FullName), Some(FULL_NAME_REQUIRED));
        assert_eq!(errors.get(FormField::YoutubeName), Some(YOUTUBE_NAME_REQUIRED));
        assert_eq!(errors.get(FormField::Gmail), Some(GMAIL_REQUIRED));
        assert!(!errors.contains(FormField::Suggestions));
    }

    #[test_case("   ", Some(FULL_NAME_REQUIRED) ; "whitespace_only")]
    #[test_case("\t\n", Some(FULL_NAME_REQUIRED) ; "tabs_and_newlines")]
    #[test_case(" Ada ", None ; "padded_name")]
    fn test_full_name_rule(value: &str, expected: Option<&str>) {
        assert_eq!(FormValidator::check(FormField::FullName, value), expected);
    }

    #[test_case("  ", Some(GMAIL_REQUIRED) ; "blank")]
    #[test_case("ada@gmail.co", Some(GMAIL_INVALID) ; "truncated_suffix")]
    #[test_case("ada@GMAIL.com", Some(GMAIL_INVALID) ; "suffix_is_case_sensitive")]
    #[test_case("ada@gmail.com ", Some(GMAIL_INVALID) ; "trailing_space")]
    #[test_case("@gmail.com", None ; "bare_suffix")]
    #[test_case("ada.lovelace@gmail.com", None ; "regular_address")]
    fn test_gmail_rule(value: &str, expected: Option<&str>) {
        assert_eq!(FormValidator::check(FormField::Gmail, value), expected);
    }

    #[test]
    fn test_suggestions_never_fail() {
        assert_eq!(FormValidator::check(FormField::Suggestions, ""), None);
    }
}
