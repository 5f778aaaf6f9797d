//! Per-field validation messages.

use std::collections::BTreeMap;

use super::FormField;

/// Validation messages keyed by field; holds entries only for failing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<FormField, String>,
}

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field, replacing any previous one.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Removes the message for a field, returning whether one existed.
    pub fn clear(&mut self, field: FormField) -> bool {
        self.entries.remove(&field).is_some()
    }

    /// Returns the message for a field.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Returns whether a field currently has a message.
    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.entries.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates messages in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_clear() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Gmail, "bad");
        errors.insert(FormField::FullName, "missing");

        assert_eq!(errors.len(), 2);
        assert!(errors.clear(FormField::Gmail));
        assert!(!errors.clear(FormField::Gmail));
        assert_eq!(errors.get(FormField::FullName), Some("missing"));
    }

    #[test]
    fn test_iterates_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Gmail, "g");
        errors.insert(FormField::FullName, "f");

        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![FormField::FullName, FormField::Gmail]);
    }
}
