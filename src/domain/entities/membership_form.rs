//! Membership form values.

use serde::{Deserialize, Serialize};

use super::FormField;

/// Current values of every form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipForm {
    full_name: String,
    youtube_name: String,
    gmail: String,
    suggestions: String,
}

impl MembershipForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::YoutubeName => &self.youtube_name,
            FormField::Gmail => &self.gmail,
            FormField::Suggestions => &self.suggestions,
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FullName => &mut self.full_name,
            FormField::YoutubeName => &mut self.youtube_name,
            FormField::Gmail => &mut self.gmail,
            FormField::Suggestions => &mut self.suggestions,
        };
        *slot = value.into();
    }

    /// Sets a field, builder style.
    #[must_use]
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
