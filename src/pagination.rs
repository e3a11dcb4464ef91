//! Page placement arithmetic for the rasterized export.
//!
//! A tall bitmap is scaled to fill the page width, then sliced into
//! fixed-height pages by placing the same full image on every page at a
//! cumulative negative vertical offset. Stacked edge-to-edge, the pages show
//! the bitmap as one continuous image split at [`PAGE_HEIGHT`] intervals.

use serde::Serialize;

/// Target page width in document units.
pub const PAGE_WIDTH: f64 = 210.0;

/// Target page height in document units.
pub const PAGE_HEIGHT: f64 = 295.0;

/// Placement of the full scaled image on one page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PagePlacement {
    /// Zero-based page index
    pub page: usize,

    /// Vertical offset of the image's top edge on this page; `0` on the
    /// first page, then increasingly negative to reveal the next band
    pub offset_y: f64,
}

/// The full set of placements for one export, plus the scaled image size.
///
/// The encoding service receives one `(image, page size, offset)` tuple per
/// placement, always with the same image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagePlan {
    /// Image width after scaling (always the page width)
    pub image_width: f64,

    /// Image height after the aspect-ratio-preserving scale
    pub image_height: f64,

    /// One placement per emitted page, in page order
    pub placements: Vec<PagePlacement>,
}

impl PagePlan {
    /// Number of pages this plan emits.
    pub fn page_count(&self) -> usize {
        self.placements.len()
    }
}

/// Height of the bitmap after scaling it to fill the page width.
///
/// # Panics
///
/// Panics if `width_px` is zero; the export pipeline rejects empty bitmaps
/// before pagination runs.
pub fn scaled_height(width_px: u32, height_px: u32) -> f64 {
    assert!(width_px > 0, "bitmap width must be positive");
    height_px as f64 * PAGE_WIDTH / width_px as f64
}

/// Slice a bitmap's scaled height into fixed-height page placements.
///
/// The first page always places the image at offset `0`. Further pages are
/// emitted while unseen image height remains, each shifting the image up by
/// one more page height, so the count is `ceil(image_height / PAGE_HEIGHT)`
/// with a minimum of one. An image height that is an exact multiple of the
/// page height does not get a trailing blank page.
///
/// # Panics
///
/// Panics if `width_px` is zero (see [`scaled_height`]).
pub fn paginate(width_px: u32, height_px: u32) -> PagePlan {
    let image_height = scaled_height(width_px, height_px);

    let mut placements = vec![PagePlacement {
        page: 0,
        offset_y: 0.0,
    }];

    let mut remaining = image_height - PAGE_HEIGHT;
    while remaining > 0.0 {
        placements.push(PagePlacement {
            page: placements.len(),
            offset_y: remaining - image_height,
        });
        remaining -= PAGE_HEIGHT;
    }

    PagePlan {
        image_width: PAGE_WIDTH,
        image_height,
        placements,
    }
}
