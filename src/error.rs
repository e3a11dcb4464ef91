//! Error types for the resume export pipeline.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation problems are not represented here: they are recoverable,
//! field-scoped data (see [`crate::validation::FieldErrors`]) rather than failures.

use thiserror::Error;

/// Errors that can occur while generating a document from a record.
///
/// Any failure from the rasterization or encoding collaborator is caught at
/// the pipeline boundary, logged, and returned as one of these variants. The
/// pipeline never leaves a partial artifact behind.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The rasterization service failed to produce a bitmap
    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    /// The rasterization service returned a bitmap with no pixels
    #[error("Rasterizer returned an empty bitmap ({width_px}x{height_px})")]
    EmptyBitmap { width_px: u32, height_px: u32 },

    /// The document encoding service failed to produce a byte stream
    #[error("Document encoding failed: {0}")]
    Encode(String),

    /// Writing the finished artifact to disk failed
    #[error("Failed to write document artifact: {0}")]
    Io(#[from] std::io::Error),

    /// Generic export error with context
    #[error("Export error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ExportError
pub type ExportResult<T> = Result<T, ExportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
