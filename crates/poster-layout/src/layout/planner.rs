//! Poster planning
//!
//! Turns a source image plus a physical target size into a page-aligned
//! canvas with the scaled image centered on it.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgb, RgbImage, Rgba};

use crate::constants::{SCALE_EPSILON, mm_to_px};
use crate::options::PosterConfig;
use crate::types::*;

use super::PosterGrid;

/// Every number needed to compose a poster, before any pixels are touched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosterLayout {
    pub page_format: PageFormat,
    pub page_width_px: u32,
    pub page_height_px: u32,
    /// Requested poster size converted to pixels
    pub target_width_px: u32,
    pub target_height_px: u32,
    /// Uniform factor applied to the source image
    pub scale: f64,
    pub resized_width: u32,
    pub resized_height: u32,
    /// Top-left corner of the resized image on the canvas
    pub offset_x: u32,
    pub offset_y: u32,
    pub grid: PosterGrid,
}

impl PosterLayout {
    pub fn canvas_width(&self) -> u32 {
        self.grid.canvas_width()
    }

    pub fn canvas_height(&self) -> u32 {
        self.grid.canvas_height()
    }
}

/// A composed canvas and the layout it was built from
#[derive(Debug, Clone)]
pub struct PosterPlan {
    pub canvas: RgbImage,
    pub layout: PosterLayout,
}

impl PosterPlan {
    pub fn grid(&self) -> &PosterGrid {
        &self.layout.grid
    }

    pub fn columns(&self) -> u32 {
        self.layout.grid.columns
    }

    pub fn rows(&self) -> u32 {
        self.layout.grid.rows
    }

    pub fn page_width_px(&self) -> u32 {
        self.layout.page_width_px
    }

    pub fn page_height_px(&self) -> u32 {
        self.layout.page_height_px
    }

    pub fn page_count(&self) -> usize {
        self.layout.grid.page_count()
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Compute the poster geometry for an image of the given pixel size.
///
/// # Arguments
/// * `image_width`, `image_height` - Source image size in pixels
/// * `target` - Requested physical poster size
/// * `page_format` - Page the poster is tiled onto
/// * `config` - Resolution and limits
pub fn compute_layout(
    image_width: u32,
    image_height: u32,
    target: &PhysicalSize,
    page_format: PageFormat,
    config: &PosterConfig,
) -> Result<PosterLayout> {
    config.validate()?;
    target.validate()?;
    if image_width == 0 || image_height == 0 {
        return Err(PosterError::InvalidSize(format!(
            "source image is {}x{} px",
            image_width, image_height
        )));
    }

    let dpi = config.dpi;

    let (page_width_mm, page_height_mm) = page_format.dimensions_mm();
    let page_width_px = to_pixels(page_width_mm, dpi, "page width")?;
    let page_height_px = to_pixels(page_height_mm, dpi, "page height")?;

    let (target_width_mm, target_height_mm) = target.to_mm();
    let target_width_px = to_pixels(target_width_mm, dpi, "target width")?;
    let target_height_px = to_pixels(target_height_mm, dpi, "target height")?;

    // The limiting axis keeps the image inside the target footprint
    let scale = (target_width_px as f64 / image_width as f64)
        .min(target_height_px as f64 / image_height as f64);
    let resized_width = scaled_dimension(image_width, scale, target_width_px);
    let resized_height = scaled_dimension(image_height, scale, target_height_px);

    let grid = PosterGrid::covering(
        target_width_px,
        target_height_px,
        page_width_px,
        page_height_px,
    );
    check_canvas_size(&grid, config.max_canvas_pixels)?;

    let offset_x = (grid.canvas_width() - resized_width) / 2;
    let offset_y = (grid.canvas_height() - resized_height) / 2;

    let layout = PosterLayout {
        page_format,
        page_width_px,
        page_height_px,
        target_width_px,
        target_height_px,
        scale,
        resized_width,
        resized_height,
        offset_x,
        offset_y,
        grid,
    };

    log::debug!(
        "Planned {}x{} {} pages: target {}x{} px, image {}x{} px at offset ({}, {})",
        grid.columns,
        grid.rows,
        page_format.name(),
        target_width_px,
        target_height_px,
        resized_width,
        resized_height,
        offset_x,
        offset_y
    );

    Ok(layout)
}

fn to_pixels(mm: f64, dpi: f64, what: &str) -> Result<u32> {
    let px = mm_to_px(mm, dpi);
    if !px.is_finite() || px < 1.0 || px > u32::MAX as f64 {
        return Err(PosterError::InvalidSize(format!(
            "{} of {} mm is {} px at {} DPI",
            what, mm, px, dpi
        )));
    }
    Ok(px as u32)
}

/// Truncating scale of one side, kept within 1..=limit
fn scaled_dimension(length: u32, scale: f64, limit: u32) -> u32 {
    let scaled = (length as f64 * scale + SCALE_EPSILON).floor();
    (scaled as u32).clamp(1, limit)
}

fn check_canvas_size(grid: &PosterGrid, limit: u64) -> Result<()> {
    let width = grid.columns as u64 * grid.page_width_px as u64;
    let height = grid.rows as u64 * grid.page_height_px as u64;
    let too_wide = width > u32::MAX as u64 || height > u32::MAX as u64;

    if too_wide || width.saturating_mul(height) > limit {
        return Err(PosterError::CanvasTooLarge {
            width,
            height,
            limit,
        });
    }
    Ok(())
}

// =============================================================================
// Composition
// =============================================================================

/// Plan a poster: scale the image to the target, then center it on a
/// page-aligned canvas filled with the background color.
///
/// Performs no I/O. Safe to call concurrently.
pub fn plan(
    image: &DynamicImage,
    target: &PhysicalSize,
    page_format: PageFormat,
    config: &PosterConfig,
) -> Result<PosterPlan> {
    let (image_width, image_height) = image.dimensions();
    let layout = compute_layout(image_width, image_height, target, page_format, config)?;

    let resized = image.resize_exact(
        layout.resized_width,
        layout.resized_height,
        FilterType::Lanczos3,
    );
    let canvas = compose_canvas(&resized, &layout, config.background);

    Ok(PosterPlan { canvas, layout })
}

/// Paste the resized image onto a fresh canvas, blending any transparency
/// over the background.
fn compose_canvas(
    resized: &DynamicImage,
    layout: &PosterLayout,
    background: [u8; 3],
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(
        layout.canvas_width(),
        layout.canvas_height(),
        Rgb(background),
    );

    let source = resized.to_rgba8();
    for (x, y, pixel) in source.enumerate_pixels() {
        let target = canvas.get_pixel_mut(layout.offset_x + x, layout.offset_y + y);
        *target = blend(*pixel, background);
    }

    canvas
}

fn blend(pixel: Rgba<u8>, background: [u8; 3]) -> Rgb<u8> {
    let Rgba([r, g, b, a]) = pixel;
    if a == u8::MAX {
        return Rgb([r, g, b]);
    }

    let alpha = a as u32;
    let mix =
        |fg: u8, bg: u8| ((fg as u32 * alpha + bg as u32 * (255 - alpha) + 127) / 255) as u8;
    Rgb([
        mix(r, background[0]),
        mix(g, background[1]),
        mix(b, background[2]),
    ])
}

// =============================================================================
// Tests
// =============================================================================
