//! Image and document I/O

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::preview::Preview;
use crate::types::*;

/// Decode an image, detecting the format from its content
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;
    Ok(image)
}

/// Load and decode an image file
pub async fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let image = tokio::task::spawn_blocking(move || decode_image(&bytes)).await??;
    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Write the preview JPEG
pub async fn save_preview(preview: &Preview, path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, &preview.image_data).await?;
    Ok(())
}

/// Write the exported PDF
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
