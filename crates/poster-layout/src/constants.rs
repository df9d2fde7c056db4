//! Shared constants for poster layout
//!
//! This module centralizes the fixed numbers used when converting physical
//! sizes to pixels and when rendering previews.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Convert millimeters to pixels at the given resolution, rounded to the
/// nearest whole pixel
#[inline]
pub fn mm_to_px(mm: f64, dpi: f64) -> f64 {
    (mm / MM_PER_INCH * dpi).round()
}

/// Convert a pixel length to millimeters at the given resolution
#[inline]
pub fn px_to_mm(px: u32, dpi: f64) -> f64 {
    px as f64 / dpi * MM_PER_INCH
}

// =============================================================================
// Layout Defaults
// =============================================================================

/// Default print resolution (pixels per inch)
pub const DEFAULT_DPI: f64 = 150.0;

/// Default canvas background (white)
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Largest canvas, in pixels, the planner will allocate by default.
/// About 1.2 GB of RGB data.
pub const DEFAULT_MAX_CANVAS_PIXELS: u64 = 400_000_000;

/// Slack added before truncating a scaled dimension, so the limiting axis
/// lands on the target pixel count instead of one below it
pub const SCALE_EPSILON: f64 = 1e-9;

// =============================================================================
// Preview
// =============================================================================

/// Bounding box of the preview thumbnail (pixels)
pub const PREVIEW_MAX_DIMENSION: u32 = 800;

/// Stroke width of the cut/alignment grid lines (canvas pixels)
pub const GRID_LINE_WIDTH_PX: u32 = 10;

/// Grid line color ("blueprint blue")
pub const GRID_COLOR: [u8; 3] = [0, 150, 255];

/// JPEG quality of the preview thumbnail
pub const PREVIEW_JPEG_QUALITY: u8 = 70;
