//! Field validation for contact records.
//!
//! [`validate`] is a pure function over a record: every rule is evaluated
//! independently (no short-circuit across fields) and all errors are
//! collected into a per-field map. An empty map means the record is valid.
//! Re-validation is idempotent.
//!
//! [`ValidatedRecord`] is the proof-of-validation wrapper the preview and
//! export stages accept; it can only be constructed by a clean pass.

use crate::domain::{email, phone, MIN_PHONE_DIGITS};
use crate::models::{ContactRecord, Field};
use serde::{Serialize, Serializer};
use std::collections::btree_map;
use std::collections::BTreeMap;
use thiserror::Error;

/// A field-scoped validation error.
///
/// The display strings are exactly what the form surface shows inline next
/// to the offending field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email format")]
    EmailFormat,

    #[error("Phone number is required")]
    PhoneRequired,

    #[error("Phone number must have at least 10 digits")]
    PhoneTooShort,
}

// Serde support - serialize as the inline message the surface displays
impl Serialize for FieldError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// The per-field error set produced by [`validate`].
///
/// At most one error is reported per field (required-ness is checked before
/// format), and fields iterate in declaration order. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field has an error (the record is valid).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the error reported for a field, if any.
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Record an error for a field, replacing any previous one.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Clear the error for a single field (used when that field is edited).
    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    /// Iterate over `(field, error)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validate a record, collecting every field error.
///
/// Rules:
/// - `name`: required (non-empty after trimming).
/// - `email`: required; otherwise must match the `local@domain.tld` shape.
/// - `phone`: required; otherwise must contain at least
///   [`MIN_PHONE_DIGITS`] digit characters once formatting is discarded.
/// - `position`, `description`: never produce errors.
///
/// Pure function: no side effects, and calling it twice on the same record
/// yields the same error set.
pub fn validate(record: &ContactRecord) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if record.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::NameRequired);
    }

    if record.email.trim().is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !email::matches_shape(&record.email) {
        errors.insert(Field::Email, FieldError::EmailFormat);
    }

    if record.phone.trim().is_empty() {
        errors.insert(Field::Phone, FieldError::PhoneRequired);
    } else if phone::digits(&record.phone).len() < MIN_PHONE_DIGITS {
        errors.insert(Field::Phone, FieldError::PhoneTooShort);
    }

    errors
}

/// A contact record that has passed validation.
///
/// The preview and export stages only accept this type, which makes the
/// "validated before export" invariant a compile-time guarantee: the only
/// way to obtain one is a clean [`validate`] pass. The wrapped record is
/// immutable; re-editing goes back through a draft and a new validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedRecord {
    record: ContactRecord,
}

impl ValidatedRecord {
    /// Validate a record, consuming it on success.
    ///
    /// # Errors
    ///
    /// Returns the full [`FieldErrors`] set when any rule fails.
    pub fn new(record: ContactRecord) -> Result<Self, FieldErrors> {
        let errors = validate(&record);
        if errors.is_empty() {
            Ok(Self { record })
        } else {
            Err(errors)
        }
    }

    /// The validated name (known non-blank).
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// The validated email address.
    pub fn email(&self) -> &str {
        &self.record.email
    }

    /// The validated phone number, as entered.
    pub fn phone(&self) -> &str {
        &self.record.phone
    }

    /// The optional position text.
    pub fn position(&self) -> &str {
        &self.record.position
    }

    /// The optional description text, line breaks intact.
    pub fn description(&self) -> &str {
        &self.record.description
    }

    /// Borrow the underlying record.
    pub fn as_record(&self) -> &ContactRecord {
        &self.record
    }

    /// Convert back into the underlying record.
    pub fn into_inner(self) -> ContactRecord {
        self.record
    }
}

impl TryFrom<ContactRecord> for ValidatedRecord {
    type Error = FieldErrors;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        Self::new(record)
    }
}
