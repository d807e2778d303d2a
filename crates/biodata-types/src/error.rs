use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::Field;

/// Result type for biodata-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Per-field validation messages, at most one per field.
///
/// Iterates in field display order. An empty map means the draft is
/// committable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(Field, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Error types that can occur in the types layer and above
#[derive(Debug)]
pub enum Error {
    /// Draft failed field validation
    Validation(FieldErrors),

    /// Initial record does not satisfy the record constraints
    InvalidSeed(FieldErrors),

    /// Field name not recognized
    UnknownField(String),

    /// View name or route path not recognized
    UnknownView(String),

    /// Draft operation attempted while the Edit view is not active
    NotEditing,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(errors) => write!(f, "Validation failed: {}", errors),
            Error::InvalidSeed(errors) => write!(f, "Invalid initial record: {}", errors),
            Error::UnknownField(name) => write!(f, "Unknown field: {}", name),
            Error::UnknownView(name) => {
                write!(f, "Unknown view: {} (expected home, profile or edit)", name)
            }
            Error::NotEditing => write!(f, "Edit view is not active"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(errors) | Error::InvalidSeed(errors) => Some(errors),
            Error::UnknownField(_) | Error::UnknownView(_) | Error::NotEditing => None,
        }
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        Error::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_display_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "Valid email is required");
        errors.insert(Field::Name, "Name must be at least 2 characters");

        assert_eq!(
            errors.to_string(),
            "name: Name must be at least 2 characters; email: Valid email is required"
        );
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::ProfilePic, "Profile picture must be a valid URL");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"profilePic": "Profile picture must be a valid URL"})
        );
    }
}
