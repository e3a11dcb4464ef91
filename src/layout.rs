//! Display layout for a validated record.
//!
//! [`PreviewDocument`] is the single composed form of a record used both by
//! the on-screen preview and as the region handed to the rasterizer during
//! export. Because the phone row is formatted here and nowhere else, the
//! same digits always render to the same string on both paths.

use crate::domain::format_phone;
use crate::models::Field;
use crate::validation::ValidatedRecord;
use serde::Serialize;

/// One labeled row of the detail section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledRow {
    /// Field label, e.g. `"Phone Number"`
    pub label: &'static str,

    /// Display value for the field
    pub value: String,
}

/// The composed display form of a validated record.
///
/// Mirrors what the export document shows: a heading with the person's name
/// and position, a labeled row per contact field, and the free-form
/// description with its embedded line breaks preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewDocument {
    /// Large heading: the person's name
    pub heading: String,

    /// Subheading under the name: the position, possibly empty
    pub subheading: String,

    /// Labeled detail rows (name, email, formatted phone, position)
    pub rows: Vec<LabeledRow>,

    /// Description text, line breaks intact
    pub description: String,
}

impl PreviewDocument {
    /// Compose the display layout for a validated record.
    pub fn compose(record: &ValidatedRecord) -> Self {
        let rows = vec![
            LabeledRow {
                label: Field::Name.label(),
                value: record.name().to_string(),
            },
            LabeledRow {
                label: Field::Email.label(),
                value: record.email().to_string(),
            },
            LabeledRow {
                label: Field::Phone.label(),
                value: format_phone(record.phone()),
            },
            LabeledRow {
                label: Field::Position.label(),
                value: record.position().to_string(),
            },
        ];

        Self {
            heading: record.name().to_string(),
            subheading: record.position().to_string(),
            rows,
            description: record.description().to_string(),
        }
    }

    /// The description split into display lines.
    pub fn description_lines(&self) -> impl Iterator<Item = &str> {
        self.description.split('\n')
    }
}
