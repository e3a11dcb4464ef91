//! Document encoding collaborator: turns a bitmap and a page plan into a
//! paginated document byte stream.

use crate::error::ExportResult;
use crate::export::raster::Bitmap;
use crate::pagination::PagePlan;
use async_trait::async_trait;

/// Document encoding service.
///
/// Receives the rendered bitmap once, plus one placement per page (same
/// image, page-sized window, cumulative offset), and returns the encoded
/// document bytes. Implementations are injected by the host application and
/// treated as opaque; failures should be reported as
/// [`ExportError::Encode`](crate::error::ExportError::Encode).
#[async_trait]
pub trait DocumentEncoder: Send + Sync {
    /// Encode the image into a paged document following the plan.
    async fn encode(&self, image: &Bitmap, plan: &PagePlan) -> ExportResult<Vec<u8>>;
}
