//! Rasterization collaborator: turns a composed layout into a bitmap.

use crate::error::ExportResult;
use crate::layout::PreviewDocument;
use async_trait::async_trait;
use serde::Serialize;

/// Default supersampling factor for rasterization.
pub const DEFAULT_RASTER_SCALE: u8 = 2;

/// Background the layout is rendered onto (opaque white).
pub const RASTER_BACKGROUND: &str = "#ffffff";

/// Configuration handed to the rasterization service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RasterOptions {
    /// Supersampling factor applied while rendering
    pub scale: u8,

    /// Background color as a hex string; the render target is opaque
    pub background_color: String,

    /// Whether the service may load cross-origin resources into the render
    pub allow_cross_origin: bool,
}

impl RasterOptions {
    /// Options with a non-default supersampling factor.
    pub fn with_scale(scale: u8) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_RASTER_SCALE,
            background_color: RASTER_BACKGROUND.to_string(),
            allow_cross_origin: true,
        }
    }
}

/// A rendered bitmap: pixel dimensions plus raw pixel data.
///
/// The pipeline only inspects the dimensions; the pixel bytes pass through
/// to the encoding service untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels
    pub width_px: u32,

    /// Height in pixels
    pub height_px: u32,

    /// Opaque pixel data as produced by the rasterizer
    pub data: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap from dimensions and pixel data.
    pub fn new(width_px: u32, height_px: u32, data: Vec<u8>) -> Self {
        Self {
            width_px,
            height_px,
            data,
        }
    }

    /// True when either dimension is zero (nothing was rendered).
    pub fn is_empty(&self) -> bool {
        self.width_px == 0 || self.height_px == 0
    }
}

/// Rasterization service: take a visual region, return a bitmap.
///
/// Implementations are injected by the host application; the library treats
/// them as opaque. Failures should be reported as
/// [`ExportError::Rasterize`](crate::error::ExportError::Rasterize).
#[async_trait]
pub trait Rasterizer: Send + Sync {
    /// Render the composed layout into a bitmap.
    async fn rasterize(
        &self,
        layout: &PreviewDocument,
        options: &RasterOptions,
    ) -> ExportResult<Bitmap>;
}
