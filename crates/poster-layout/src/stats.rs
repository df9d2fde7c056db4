use crate::constants::px_to_mm;
use crate::layout::PosterLayout;
use crate::options::PosterConfig;
use crate::types::*;

/// Summary of a planned poster, in pixels and millimeters
#[derive(Debug, Clone, PartialEq)]
pub struct PosterStatistics {
    pub page_format: PageFormat,
    pub columns: u32,
    pub rows: u32,
    /// Total pages to print
    pub pages: usize,
    pub page_size_px: (u32, u32),
    pub target_size_px: (u32, u32),
    pub canvas_size_px: (u32, u32),
    /// Assembled poster size, whole pages included
    pub canvas_size_mm: (f64, f64),
    /// Printed size of the image itself
    pub image_size_mm: (f64, f64),
    pub scale: f64,
}

/// Calculate statistics for a planned layout
pub fn calculate_statistics(layout: &PosterLayout, config: &PosterConfig) -> PosterStatistics {
    let dpi = config.dpi;
    let grid = &layout.grid;

    PosterStatistics {
        page_format: layout.page_format,
        columns: grid.columns,
        rows: grid.rows,
        pages: grid.page_count(),
        page_size_px: (layout.page_width_px, layout.page_height_px),
        target_size_px: (layout.target_width_px, layout.target_height_px),
        canvas_size_px: (grid.canvas_width(), grid.canvas_height()),
        canvas_size_mm: (
            px_to_mm(grid.canvas_width(), dpi),
            px_to_mm(grid.canvas_height(), dpi),
        ),
        image_size_mm: (
            px_to_mm(layout.resized_width, dpi),
            px_to_mm(layout.resized_height, dpi),
        ),
        scale: layout.scale,
    }
}
