//! Tile export
//!
//! Cuts a planned canvas into page-sized tiles and assembles them into a
//! multi-page PDF, one tile per page.

use image::imageops;
use image::{DynamicImage, Rgb, RgbImage};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, RawImage, RawImageData, RawImageFormat,
    XObjectTransform,
};

use crate::constants::px_to_mm;
use crate::layout::{PosterGrid, PosterPlan, TileRect, plan};
use crate::options::PosterConfig;
use crate::types::*;

/// One page of the poster
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub row: u32,
    pub col: u32,
    pub image: RgbImage,
}

/// Tile rectangles in print order (row-major)
pub fn tile_rects(grid: &PosterGrid) -> Vec<TileRect> {
    grid.tiles().collect()
}

/// Crop the canvas into one tile per grid cell, in print order
pub fn export_tiles(plan: &PosterPlan) -> Vec<Tile> {
    plan.grid()
        .tiles()
        .map(|rect| Tile {
            row: rect.row,
            col: rect.col,
            image: imageops::crop_imm(&plan.canvas, rect.x, rect.y, rect.width, rect.height)
                .to_image(),
        })
        .collect()
}

/// Put tiles back at their grid positions on a fresh canvas
pub fn reassemble_tiles(tiles: &[Tile], grid: &PosterGrid, background: [u8; 3]) -> RgbImage {
    let mut canvas =
        RgbImage::from_pixel(grid.canvas_width(), grid.canvas_height(), Rgb(background));
    for tile in tiles {
        let rect = grid.tile_rect(tile.row, tile.col);
        imageops::replace(&mut canvas, &tile.image, rect.x as i64, rect.y as i64);
    }
    canvas
}

/// Build a PDF with one page per tile.
///
/// Each page is sized so its tile fills it exactly at `dpi`.
pub fn tiles_to_pdf_bytes(tiles: &[Tile], dpi: f64, title: &str) -> Result<Vec<u8>> {
    if tiles.is_empty() {
        return Err(PosterError::Pdf("No tiles to export".to_string()));
    }

    let mut doc = PdfDocument::new(title);
    let mut pages = Vec::with_capacity(tiles.len());

    for tile in tiles {
        let (width, height) = tile.image.dimensions();
        let raw = RawImage {
            pixels: RawImageData::U8(tile.image.as_raw().clone()),
            width: width as usize,
            height: height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let image_id = doc.add_image(&raw);

        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                dpi: Some(dpi as f32),
                ..Default::default()
            },
        }];

        pages.push(PdfPage::new(
            Mm(px_to_mm(width, dpi) as f32),
            Mm(px_to_mm(height, dpi) as f32),
            ops,
        ));
    }

    doc.pages = pages;

    // Tiles are print data; keep them lossless and at full size
    let save_options = PdfSaveOptions {
        image_optimization: None,
        ..Default::default()
    };
    let mut warnings = Vec::new();
    let bytes = doc.save(&save_options, &mut warnings);
    for warning in &warnings {
        log::debug!("PDF warning: {:?}", warning);
    }

    Ok(bytes)
}

/// Plan, tile and encode a poster PDF on the blocking pool
pub async fn generate_pdf(
    image: DynamicImage,
    target: PhysicalSize,
    page_format: PageFormat,
    config: &PosterConfig,
) -> Result<Vec<u8>> {
    let config = config.clone();

    let bytes = tokio::task::spawn_blocking(move || {
        let plan = plan(&image, &target, page_format, &config)?;
        let tiles = export_tiles(&plan);
        log::info!(
            "Exporting {} {} pages ({}x{})",
            tiles.len(),
            page_format.name(),
            plan.columns(),
            plan.rows()
        );
        tiles_to_pdf_bytes(&tiles, config.dpi, &document_title(page_format))
    })
    .await??;

    Ok(bytes)
}

/// Suggested file name for a downloaded poster, e.g. `poster_a4.pdf`
pub fn download_filename(page_format: PageFormat) -> String {
    format!("poster_{}.pdf", page_format.name())
}

/// Title stored in the PDF metadata, e.g. `Poster (a4)`
pub fn document_title(page_format: PageFormat) -> String {
    format!("Poster ({})", page_format.name())
}
