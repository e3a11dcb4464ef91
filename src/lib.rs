//! Resume Export - validation, formatting, and paginated PDF export for
//! contact resume records.
//!
//! This library backs a single-page data-entry surface: it validates the
//! entered contact details field-by-field, normalizes phone numbers into a
//! single display form, and drives a bitmap-to-document export pipeline
//! that rasterizes the composed layout and slices it into fixed-height
//! pages. The rasterization and document-encoding services are opaque
//! collaborators injected by the host.
//!
//! # Architecture
//!
//! - **models**: the contact record being collected and its field keys
//! - **domain**: validated value objects for emails and phone numbers,
//!   plus the shared phone display formatter
//! - **validation**: per-field error collection and the validated-record
//!   wrapper required by the export stage
//! - **layout**: the composed display form shared by preview and export
//! - **pagination**: fixed-height page placement arithmetic
//! - **export**: rasterizer/encoder seams and the export pipeline
//! - **session**: the editing/previewing state container
//! - **config**: configuration management from environment variables
//! - **error**: custom error types for precise error handling
//! - **observability**: metrics tracking and logging setup

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod layout;
pub mod models;
pub mod observability;
pub mod pagination;
pub mod session;
pub mod validation;

pub use config::Config;
pub use domain::{format_phone, EmailAddress, PhoneNumber, MIN_PHONE_DIGITS};
pub use error::{ConfigError, ConfigResult, ExportError, ExportResult};
pub use export::{
    Bitmap, DocumentEncoder, ExportArtifact, Exporter, RasterOptions, Rasterizer,
    EXPORT_FAILURE_ALERT, FALLBACK_FILENAME,
};
pub use layout::{LabeledRow, PreviewDocument};
pub use models::{ContactRecord, Field};
pub use observability::MetricsTracker;
pub use pagination::{paginate, PagePlacement, PagePlan, PAGE_HEIGHT, PAGE_WIDTH};
pub use session::{Screen, Session};
pub use validation::{validate, FieldError, FieldErrors, ValidatedRecord};
