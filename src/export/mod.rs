//! Bitmap-to-document export pipeline.
//!
//! The two conversion concerns are opaque external collaborators behind
//! traits: a [`Rasterizer`] turns the composed layout into a bitmap, and a
//! [`DocumentEncoder`] turns that bitmap plus a page plan into a paginated
//! document byte stream. [`Exporter`] sequences them (rasterize → paginate
//! → encode) over a single shared render surface.

pub mod encoder;
pub mod pipeline;
pub mod raster;

pub use encoder::DocumentEncoder;
pub use pipeline::{export_filename, ExportArtifact, Exporter, FALLBACK_FILENAME};
pub use raster::{Bitmap, RasterOptions, Rasterizer};

/// Generic message a host surfaces when any export step fails.
pub const EXPORT_FAILURE_ALERT: &str = "Error generating PDF. Please try again.";
