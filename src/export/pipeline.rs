//! The export pipeline: rasterize, paginate, encode.

use crate::config::Config;
use crate::error::{ExportError, ExportResult};
use crate::export::encoder::DocumentEncoder;
use crate::export::raster::{RasterOptions, Rasterizer};
use crate::layout::PreviewDocument;
use crate::observability::{MetricsTracker, Timer};
use crate::pagination;
use crate::validation::ValidatedRecord;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Filename used when the record's name is blank.
pub const FALLBACK_FILENAME: &str = "resume.pdf";

/// Build the artifact filename for a record name.
///
/// `<name>.pdf`, falling back to [`FALLBACK_FILENAME`] when the trimmed
/// name is empty. Characters that are hostile in file paths are replaced
/// with underscores.
pub fn export_filename(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return FALLBACK_FILENAME.to_string();
    }
    format!("{}.pdf", sanitize_filename(trimmed))
}

/// Replace path separators and other unsafe filename characters.
fn sanitize_filename(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// The finished export: a document byte stream and its target filename.
///
/// Only produced when every pipeline step succeeded; a failed export never
/// leaves a partial artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Target filename, e.g. `John Doe.pdf`
    pub filename: String,

    /// Encoded document bytes
    pub bytes: Vec<u8>,

    /// Number of pages the document contains
    pub page_count: usize,
}

impl ExportArtifact {
    /// Write the byte stream to `dir` under the artifact's filename.
    ///
    /// This is the only file the system ever persists.
    pub fn write_to(&self, dir: &Path) -> ExportResult<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Sequences the export: compose layout → rasterize → paginate → encode.
///
/// The rasterizer and encoder are opaque collaborators supplied by the host.
/// Exports are serialized over a single shared off-screen render surface, so
/// no two exports are ever in flight concurrently. There is no cancellation
/// and no automatic retry: an export runs to completion or reports failure.
pub struct Exporter {
    rasterizer: Arc<dyn Rasterizer>,
    encoder: Arc<dyn DocumentEncoder>,
    options: RasterOptions,
    metrics: MetricsTracker,
    render_surface: Mutex<()>,
}

impl Exporter {
    /// Create an exporter with default rasterization options.
    pub fn new(rasterizer: Arc<dyn Rasterizer>, encoder: Arc<dyn DocumentEncoder>) -> Self {
        Self::with_options(rasterizer, encoder, RasterOptions::default())
    }

    /// Create an exporter with explicit rasterization options.
    pub fn with_options(
        rasterizer: Arc<dyn Rasterizer>,
        encoder: Arc<dyn DocumentEncoder>,
        options: RasterOptions,
    ) -> Self {
        Self {
            rasterizer,
            encoder,
            options,
            metrics: MetricsTracker::new(),
            render_surface: Mutex::new(()),
        }
    }

    /// Create an exporter configured from the environment-driven [`Config`].
    pub fn from_config(
        rasterizer: Arc<dyn Rasterizer>,
        encoder: Arc<dyn DocumentEncoder>,
        config: &Config,
    ) -> Self {
        Self::with_options(
            rasterizer,
            encoder,
            RasterOptions::with_scale(config.raster_scale),
        )
    }

    /// The rasterization options this exporter passes to its collaborator.
    pub fn options(&self) -> &RasterOptions {
        &self.options
    }

    /// Metrics collected across exports.
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Export a validated record into a document artifact.
    ///
    /// Holds the render-surface lock for the full rasterize → encode
    /// sequence. Any collaborator failure is logged and returned as an
    /// [`ExportError`]; callers surface it generically (see
    /// [`EXPORT_FAILURE_ALERT`](crate::export::EXPORT_FAILURE_ALERT)).
    pub async fn export(&self, record: &ValidatedRecord) -> ExportResult<ExportArtifact> {
        let _surface = self.render_surface.lock().await;
        let timer = Timer::new("export");

        let result = self.run(record).await;
        match &result {
            Ok(artifact) => {
                let duration_ms = timer.finish_with_status(true);
                self.metrics.track_export(duration_ms, artifact.page_count, true);
                info!(
                    filename = %artifact.filename,
                    pages = artifact.page_count,
                    bytes = artifact.bytes.len(),
                    "Export complete"
                );
            }
            Err(e) => {
                let duration_ms = timer.finish_with_status(false);
                self.metrics.track_export(duration_ms, 0, false);
                error!(error = %e, "Error generating PDF");
            }
        }

        result
    }

    async fn run(&self, record: &ValidatedRecord) -> ExportResult<ExportArtifact> {
        let layout = PreviewDocument::compose(record);

        let bitmap = self.rasterizer.rasterize(&layout, &self.options).await?;
        if bitmap.is_empty() {
            return Err(ExportError::EmptyBitmap {
                width_px: bitmap.width_px,
                height_px: bitmap.height_px,
            });
        }

        let plan = pagination::paginate(bitmap.width_px, bitmap.height_px);
        debug!(
            width_px = bitmap.width_px,
            height_px = bitmap.height_px,
            image_height = plan.image_height,
            pages = plan.page_count(),
            "Bitmap paginated"
        );

        let bytes = self.encoder.encode(&bitmap, &plan).await?;

        Ok(ExportArtifact {
            filename: export_filename(record.name()),
            bytes,
            page_count: plan.page_count(),
        })
    }
}
