use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

use crate::layout::{PosterGrid, PosterPlan, plan};
use crate::options::{PosterConfig, PreviewOptions};
use crate::types::*;

/// An encoded low-resolution preview of a poster
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    /// JPEG bytes
    pub image_data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub columns: u32,
    pub rows: u32,
    /// Number of pages the poster prints on
    pub pages: usize,
}

impl Preview {
    /// Standard base64 encoding of the JPEG, for embedding in JSON
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.image_data)
    }
}

/// Render a preview with cut lines at every page boundary, shrunk to fit the
/// configured bounds and encoded as JPEG.
///
/// Draws on a copy of the canvas. Callers that are done with the plan should
/// use [`render_preview_owned`] instead.
pub fn render_preview(plan: &PosterPlan, options: &PreviewOptions) -> Result<Preview> {
    encode_preview(plan.canvas.clone(), plan.grid(), options)
}

/// Same as [`render_preview`], drawing directly on the plan's canvas
pub fn render_preview_owned(plan: PosterPlan, options: &PreviewOptions) -> Result<Preview> {
    let grid = *plan.grid();
    encode_preview(plan.canvas, &grid, options)
}

fn encode_preview(
    mut canvas: RgbImage,
    grid: &PosterGrid,
    options: &PreviewOptions,
) -> Result<Preview> {
    draw_grid_lines(&mut canvas, grid, options);

    let (width, height) = fit_within(
        canvas.width(),
        canvas.height(),
        options.max_width,
        options.max_height,
    );
    let thumbnail = if (width, height) == canvas.dimensions() {
        canvas
    } else {
        imageops::resize(&canvas, width, height, FilterType::CatmullRom)
    };

    let mut image_data = Vec::new();
    JpegEncoder::new_with_quality(&mut image_data, options.jpeg_quality)
        .encode_image(&thumbnail)?;

    Ok(Preview {
        image_data,
        width,
        height,
        columns: grid.columns,
        rows: grid.rows,
        pages: grid.page_count(),
    })
}

/// Plan and render a preview on the blocking pool
pub async fn generate_preview(
    image: DynamicImage,
    target: PhysicalSize,
    page_format: PageFormat,
    config: &PosterConfig,
) -> Result<Preview> {
    let config = config.clone();

    let preview = tokio::task::spawn_blocking(move || {
        let plan = plan(&image, &target, page_format, &config)?;
        render_preview_owned(plan, &config.preview)
    })
    .await??;

    Ok(preview)
}

/// Draw a line of `line_width_px` centered on every page boundary, outer
/// edges included. Lines are clipped to the canvas.
pub fn draw_grid_lines(canvas: &mut RgbImage, grid: &PosterGrid, options: &PreviewOptions) {
    let color = Rgb(options.grid_color);
    let width = options.line_width_px;
    if width == 0 {
        return;
    }

    let (canvas_width, canvas_height) = canvas.dimensions();
    let half = (width / 2) as i64;

    for x in grid.vertical_boundaries() {
        let start = x as i64 - half;
        fill_rect(canvas, start, 0, start + width as i64, canvas_height as i64, color);
    }
    for y in grid.horizontal_boundaries() {
        let start = y as i64 - half;
        fill_rect(canvas, 0, start, canvas_width as i64, start + width as i64, color);
    }
}

/// Fill [x0, x1) × [y0, y1), clipped to the image
fn fill_rect(canvas: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
    let (width, height) = canvas.dimensions();
    let x0 = x0.clamp(0, width as i64) as u32;
    let x1 = x1.clamp(0, width as i64) as u32;
    let y0 = y0.clamp(0, height as i64) as u32;
    let y1 = y1.clamp(0, height as i64) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Largest size with the same aspect ratio that fits in the bounds.
/// Never upscales.
fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let ratio = (max_width as f64 / width as f64).min(max_height as f64 / height as f64);
    let fitted_width = ((width as f64 * ratio).round() as u32).clamp(1, max_width);
    let fitted_height = ((height as f64 * ratio).round() as u32).clamp(1, max_height);
    (fitted_width, fitted_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within() {
        assert_eq!(fit_within(2480, 5262, 800, 800), (377, 800));
        assert_eq!(fit_within(5262, 2480, 800, 800), (800, 377));
        assert_eq!(fit_within(400, 300, 800, 800), (400, 300));
        assert_eq!(fit_within(10_000, 1, 800, 800), (800, 1));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        fill_rect(&mut canvas, -2, -2, 1, 1, Rgb([9, 9, 9]));

        assert_eq!(canvas.get_pixel(0, 0), &Rgb([9, 9, 9]));
        assert_eq!(canvas.get_pixel(1, 0), &Rgb([0, 0, 0]));
        assert_eq!(canvas.get_pixel(0, 1), &Rgb([0, 0, 0]));
    }
}
