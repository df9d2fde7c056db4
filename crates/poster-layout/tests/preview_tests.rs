mod common;

use common::*;
use image::{Rgb, RgbImage};
use poster_layout::*;

fn sample_plan(config: &PosterConfig) -> PosterPlan {
    let image = gradient_image(100, 200);
    let target = PhysicalSize::new(300.0, 600.0, Unit::Millimeter);
    plan(&image, &target, PageFormat::A4, config).unwrap()
}

#[test]
fn test_render_preview_reports_pages() {
    let config = low_dpi_config();
    let plan = sample_plan(&config);

    let preview = render_preview(&plan, &config.preview).unwrap();

    assert_eq!(preview.pages, 6);
    assert_eq!((preview.columns, preview.rows), (2, 3));
    // Canvas already fits in 800x800
    assert_eq!((preview.width, preview.height), (166, 351));
}

#[test]
fn test_render_preview_is_jpeg_within_bounds() {
    let mut config = low_dpi_config();
    config.preview.max_width = 100;
    config.preview.max_height = 100;
    let plan = sample_plan(&config);

    let preview = render_preview(&plan, &config.preview).unwrap();

    assert_eq!(&preview.image_data[..2], &[0xFF, 0xD8]);
    let decoded = image::load_from_memory(&preview.image_data).unwrap();
    assert_eq!(decoded.width(), preview.width);
    assert_eq!(decoded.height(), preview.height);
    assert_eq!((preview.width, preview.height), (47, 100));
}

#[test]
fn test_preview_base64() {
    let config = low_dpi_config();
    let plan = sample_plan(&config);
    let preview = render_preview(&plan, &config.preview).unwrap();

    let encoded = preview.to_base64();
    // Base64 of the JPEG SOI marker
    assert!(encoded.starts_with("/9j/"));
    assert_eq!(encoded.len(), preview.image_data.len().div_ceil(3) * 4);
}

#[test]
fn test_render_preview_leaves_canvas_untouched() {
    let config = low_dpi_config();
    let plan = sample_plan(&config);
    let before = plan.canvas.clone();

    render_preview(&plan, &config.preview).unwrap();

    assert_eq!(plan.canvas, before);
}

#[test]
fn test_owned_preview_matches_borrowed() {
    let config = low_dpi_config();
    let plan = sample_plan(&config);

    let borrowed = render_preview(&plan, &config.preview).unwrap();
    let owned = render_preview_owned(plan, &config.preview).unwrap();

    assert_eq!(owned, borrowed);
    assert_eq!(owned.pages, 6);
}

#[test]
fn test_draw_grid_lines_at_every_boundary() {
    let white = Rgb([255, 255, 255]);
    let blue = Rgb([0, 150, 255]);
    let grid = PosterGrid::covering(250, 150, 100, 100);
    let mut canvas = RgbImage::from_pixel(grid.canvas_width(), grid.canvas_height(), white);

    draw_grid_lines(&mut canvas, &grid, &PreviewOptions::default());

    // Vertical lines centered on x = 0, 100, 200, 300
    assert_eq!(canvas.get_pixel(0, 50), &blue);
    assert_eq!(canvas.get_pixel(4, 50), &blue);
    assert_eq!(canvas.get_pixel(5, 50), &white);
    assert_eq!(canvas.get_pixel(94, 50), &white);
    assert_eq!(canvas.get_pixel(95, 50), &blue);
    assert_eq!(canvas.get_pixel(104, 50), &blue);
    assert_eq!(canvas.get_pixel(105, 50), &white);
    assert_eq!(canvas.get_pixel(299, 50), &blue);

    // Horizontal lines centered on y = 0, 100, 200
    assert_eq!(canvas.get_pixel(50, 0), &blue);
    assert_eq!(canvas.get_pixel(50, 100), &blue);
    assert_eq!(canvas.get_pixel(50, 199), &blue);

    // Page interior
    assert_eq!(canvas.get_pixel(50, 50), &white);
    assert_eq!(canvas.get_pixel(250, 150), &white);
}

#[test]
fn test_draw_grid_lines_zero_width_is_noop() {
    let white = Rgb([255, 255, 255]);
    let grid = PosterGrid::covering(200, 200, 100, 100);
    let mut canvas = RgbImage::from_pixel(200, 200, white);
    let options = PreviewOptions {
        line_width_px: 0,
        ..Default::default()
    };

    draw_grid_lines(&mut canvas, &grid, &options);

    assert!(canvas.pixels().all(|p| *p == white));
}

#[tokio::test]
async fn test_generate_preview() {
    let config = low_dpi_config();
    let image = gradient_image(100, 200);
    let target = PhysicalSize::new(30.0, 60.0, Unit::Centimeter);

    let preview = generate_preview(image, target, PageFormat::A4, &config)
        .await
        .unwrap();

    assert_eq!(preview.pages, 6);
    assert!(!preview.image_data.is_empty());
}

#[tokio::test]
async fn test_generate_preview_invalid_size() {
    let config = low_dpi_config();
    let image = gradient_image(10, 10);
    let target = PhysicalSize::new(0.0, 60.0, Unit::Centimeter);

    let result = generate_preview(image, target, PageFormat::A4, &config).await;
    assert!(matches!(result, Err(PosterError::InvalidSize(_))));
}
