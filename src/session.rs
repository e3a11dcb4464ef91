//! The form session: an explicit finite-state container.
//!
//! Replaces ambient "current screen / current record" state with a small
//! machine holding one draft record and one of two screens, transitioned
//! only by the defined actions. All logic runs in response to discrete
//! host actions; there is no background activity.

use crate::error::ExportResult;
use crate::export::{ExportArtifact, Exporter};
use crate::layout::PreviewDocument;
use crate::models::{ContactRecord, Field};
use crate::validation::{FieldErrors, ValidatedRecord};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Which surface the host is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// The data-entry form
    Editing,

    /// The document preview
    Previewing,
}

/// One form session: a draft record, its error set, and the preview slot.
///
/// The draft is mutated field-by-field as the user types. Validation runs
/// on the `view` and `submit` actions; a clean pass snapshots the draft
/// into an immutable [`ValidatedRecord`], which is the only thing the
/// preview and export stages ever see. A new submission replaces the
/// snapshot entirely.
pub struct Session {
    screen: Screen,
    draft: ContactRecord,
    errors: FieldErrors,
    record: Option<ValidatedRecord>,
    exporter: Arc<Exporter>,
}

impl Session {
    /// Start a session on the editing screen with an empty draft.
    pub fn new(exporter: Arc<Exporter>) -> Self {
        Self {
            screen: Screen::Editing,
            draft: ContactRecord::new(),
            errors: FieldErrors::new(),
            record: None,
            exporter,
        }
    }

    /// The screen currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The draft record as currently entered.
    pub fn draft(&self) -> &ContactRecord {
        &self.draft
    }

    /// Field errors from the most recent validation pass.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The composed preview, when a validated record is available.
    pub fn preview(&self) -> Option<PreviewDocument> {
        self.record.as_ref().map(PreviewDocument::compose)
    }

    /// Overwrite one field of the draft as the user types.
    ///
    /// Clears any error previously reported for that field; full
    /// validation does not rerun until the next `view`/`submit`.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.remove(field);
    }

    /// The "view" action: validate and move to the preview screen.
    ///
    /// Returns `true` on a clean pass (the preview slot now holds the
    /// validated snapshot); on failure the errors are stored for inline
    /// display and the screen does not change.
    pub fn view(&mut self) -> bool {
        match self.validate_draft() {
            Some(validated) => {
                self.record = Some(validated);
                self.screen = Screen::Previewing;
                debug!("Transition to preview");
                true
            }
            None => false,
        }
    }

    /// The "back" action: return from the preview to the form.
    ///
    /// The draft is untouched, so the form shows the same values.
    pub fn back(&mut self) {
        self.screen = Screen::Editing;
    }

    /// The "submit" action: validate, then export directly.
    ///
    /// Returns `Ok(None)` when validation blocks the export (errors are
    /// stored for inline display), `Ok(Some(artifact))` on success, and
    /// `Err` when a pipeline collaborator fails — the screen does not
    /// change, no artifact is produced, and the host surfaces
    /// [`EXPORT_FAILURE_ALERT`](crate::export::EXPORT_FAILURE_ALERT).
    pub async fn submit(&mut self) -> ExportResult<Option<ExportArtifact>> {
        let validated = match self.validate_draft() {
            Some(validated) => validated,
            None => return Ok(None),
        };

        self.record = Some(validated.clone());
        let artifact = self.exporter.export(&validated).await?;
        Ok(Some(artifact))
    }

    /// The "download" action on the preview screen.
    ///
    /// Exports the previously validated record; no re-validation happens
    /// because the preview slot only ever holds a clean snapshot. Returns
    /// `None` when the session is not previewing.
    pub async fn download(&self) -> Option<ExportResult<ExportArtifact>> {
        if self.screen != Screen::Previewing {
            return None;
        }
        let record = self.record.as_ref()?;
        Some(self.exporter.export(record).await)
    }

    fn validate_draft(&mut self) -> Option<ValidatedRecord> {
        match ValidatedRecord::new(self.draft.clone()) {
            Ok(validated) => {
                self.exporter.metrics().track_validation(true);
                self.errors = FieldErrors::new();
                Some(validated)
            }
            Err(errors) => {
                self.exporter.metrics().track_validation(false);
                debug!(error_count = errors.len(), "Validation blocked the action");
                self.errors = errors;
                None
            }
        }
    }
}
