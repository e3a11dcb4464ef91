//! Mock collaborators for exercising the export pipeline without a real
//! rasterization or document-encoding service.

use async_trait::async_trait;
use resume_export::error::{ExportError, ExportResult};
use resume_export::export::{Bitmap, DocumentEncoder, RasterOptions, Rasterizer};
use resume_export::layout::PreviewDocument;
use resume_export::pagination::PagePlan;
use std::sync::{Arc, Mutex};

/// Mock rasterizer that returns a bitmap with configured dimensions and
/// records what it was asked to render.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRasterizer {
    width_px: u32,
    height_px: u32,
    calls: Arc<Mutex<usize>>,
    last_layout: Arc<Mutex<Option<PreviewDocument>>>,
    last_options: Arc<Mutex<Option<RasterOptions>>>,
}

#[allow(dead_code)]
impl MockRasterizer {
    /// Create a mock producing bitmaps of the given pixel dimensions.
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
            calls: Arc::new(Mutex::new(0)),
            last_layout: Arc::new(Mutex::new(None)),
            last_options: Arc::new(Mutex::new(None)),
        }
    }

    /// Number of times `rasterize` was invoked.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// The layout most recently handed to the rasterizer.
    pub fn last_layout(&self) -> Option<PreviewDocument> {
        self.last_layout.lock().unwrap().clone()
    }

    /// The options most recently handed to the rasterizer.
    pub fn last_options(&self) -> Option<RasterOptions> {
        self.last_options.lock().unwrap().clone()
    }
}

#[async_trait]
impl Rasterizer for MockRasterizer {
    async fn rasterize(
        &self,
        layout: &PreviewDocument,
        options: &RasterOptions,
    ) -> ExportResult<Bitmap> {
        *self.calls.lock().unwrap() += 1;
        *self.last_layout.lock().unwrap() = Some(layout.clone());
        *self.last_options.lock().unwrap() = Some(options.clone());

        Ok(Bitmap::new(self.width_px, self.height_px, vec![0xff; 16]))
    }
}

/// Mock rasterizer whose service always fails.
pub struct FailingRasterizer;

#[async_trait]
impl Rasterizer for FailingRasterizer {
    async fn rasterize(
        &self,
        _layout: &PreviewDocument,
        _options: &RasterOptions,
    ) -> ExportResult<Bitmap> {
        Err(ExportError::Rasterize("render target lost".to_string()))
    }
}

/// Mock encoder that returns a fixed byte stream and records the page plan
/// it was asked to encode.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockEncoder {
    plans: Arc<Mutex<Vec<PagePlan>>>,
}

#[allow(dead_code)]
impl MockEncoder {
    pub fn new() -> Self {
        Self {
            plans: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times `encode` was invoked.
    pub fn call_count(&self) -> usize {
        self.plans.lock().unwrap().len()
    }

    /// The plan most recently handed to the encoder.
    pub fn last_plan(&self) -> Option<PagePlan> {
        self.plans.lock().unwrap().last().cloned()
    }
}

impl Default for MockEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentEncoder for MockEncoder {
    async fn encode(&self, _image: &Bitmap, plan: &PagePlan) -> ExportResult<Vec<u8>> {
        self.plans.lock().unwrap().push(plan.clone());
        Ok(b"%PDF-mock".to_vec())
    }
}

/// Mock encoder whose service always fails.
pub struct FailingEncoder;

#[async_trait]
impl DocumentEncoder for FailingEncoder {
    async fn encode(&self, _image: &Bitmap, _plan: &PagePlan) -> ExportResult<Vec<u8>> {
        Err(ExportError::Encode("unsupported image format".to_string()))
    }
}
