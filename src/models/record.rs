//! ContactRecord model: the contact and resume details collected by the form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of a [`ContactRecord`].
///
/// Used to address individual fields when mutating a draft and as the key
/// of the per-field error map returned by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Position,
    Description,
}

impl Field {
    /// The label the display surface uses for this field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Position => "Position",
            Field::Description => "Description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A person's contact and resume details as entered on the form.
///
/// The record starts empty, is mutated field-by-field as the user types
/// (plain overwrite, no merge semantics), and is replaced entirely when a
/// new submission occurs. Raw field values are unvalidated here; a record
/// only reaches the preview/export stage as a
/// [`crate::validation::ValidatedRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    /// Full name (required)
    pub name: String,

    /// Email address (required, `local@domain.tld` shape)
    pub email: String,

    /// Phone number (required, at least 10 digits after stripping formatting)
    pub phone: String,

    /// Desired position (optional free text)
    pub position: String,

    /// Free-form description; embedded line breaks are preserved on display
    pub description: String,
}

impl ContactRecord {
    /// Create a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a single field's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Position => self.position = value,
            Field::Description => self.description = value,
        }
    }

    /// Get a single field's raw value.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Position => &self.position,
            Field::Description => &self.description,
        }
    }
}
