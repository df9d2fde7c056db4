use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Preview rendering settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PreviewOptions {
    /// Thumbnail bounding box width
    pub max_width: u32,
    /// Thumbnail bounding box height
    pub max_height: u32,
    /// Grid line stroke width in canvas pixels
    pub line_width_px: u32,
    pub grid_color: [u8; 3],
    /// JPEG quality, 1..=100
    pub jpeg_quality: u8,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_width: PREVIEW_MAX_DIMENSION,
            max_height: PREVIEW_MAX_DIMENSION,
            line_width_px: GRID_LINE_WIDTH_PX,
            grid_color: GRID_COLOR,
            jpeg_quality: PREVIEW_JPEG_QUALITY,
        }
    }
}

/// Process-wide poster configuration.
///
/// Built once at startup and shared read-only with every planning call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PosterConfig {
    /// Print resolution in pixels per inch
    pub dpi: f64,
    /// Canvas fill behind and around the image
    pub background: [u8; 3],
    /// Upper bound on canvas width × height
    pub max_canvas_pixels: u64,
    pub preview: PreviewOptions,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            background: DEFAULT_BACKGROUND,
            max_canvas_pixels: DEFAULT_MAX_CANVAS_PIXELS,
            preview: PreviewOptions::default(),
        }
    }
}

impl PosterConfig {
    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config: Self = serde_json::from_slice(&bytes)
            .map_err(|e| PosterError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PosterError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(PosterError::Config(format!(
                "DPI must be a positive number, got {}",
                self.dpi
            )));
        }

        if self.max_canvas_pixels == 0 {
            return Err(PosterError::Config(
                "max_canvas_pixels must be greater than zero".to_string(),
            ));
        }

        let preview = &self.preview;
        if preview.max_width == 0 || preview.max_height == 0 {
            return Err(PosterError::Config(
                "Preview bounds must be at least 1x1".to_string(),
            ));
        }
        if !(1..=100).contains(&preview.jpeg_quality) {
            return Err(PosterError::Config(format!(
                "JPEG quality must be between 1 and 100, got {}",
                preview.jpeg_quality
            )));
        }

        Ok(())
    }
}
