//! Page grid calculation
//!
//! The grid is derived from the target and page pixel sizes and is never
//! stored. It drives both the preview grid lines and the export crops.

// =============================================================================
// Types
// =============================================================================

/// Pixel rectangle of one tile on the canvas (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// Row index (0 = top row)
    pub row: u32,
    /// Column index (0 = leftmost column)
    pub col: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Grid of pages covering a poster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosterGrid {
    pub columns: u32,
    pub rows: u32,
    /// Width of a single page in pixels
    pub page_width_px: u32,
    /// Height of a single page in pixels
    pub page_height_px: u32,
}

// =============================================================================
// Grid Creation
// =============================================================================

impl PosterGrid {
    /// Smallest grid of pages covering the target.
    ///
    /// Uses true ceiling division: a target that is an exact multiple of the
    /// page size gets exactly that many pages, not one more.
    /// Page sizes must be non-zero.
    pub fn covering(
        target_width_px: u32,
        target_height_px: u32,
        page_width_px: u32,
        page_height_px: u32,
    ) -> Self {
        Self {
            columns: target_width_px.div_ceil(page_width_px),
            rows: target_height_px.div_ceil(page_height_px),
            page_width_px,
            page_height_px,
        }
    }

    /// Total number of pages (tiles)
    pub fn page_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn canvas_width(&self) -> u32 {
        self.columns * self.page_width_px
    }

    pub fn canvas_height(&self) -> u32 {
        self.rows * self.page_height_px
    }

    // =========================================================================
    // Cells
    // =========================================================================

    /// Rectangle of the tile at (row, col)
    pub fn tile_rect(&self, row: u32, col: u32) -> TileRect {
        TileRect {
            row,
            col,
            x: col * self.page_width_px,
            y: row * self.page_height_px,
            width: self.page_width_px,
            height: self.page_height_px,
        }
    }

    /// All tiles in row-major order: top to bottom, left to right in a row
    pub fn tiles(&self) -> impl Iterator<Item = TileRect> {
        let grid = *self;
        (0..grid.rows)
            .flat_map(move |row| (0..grid.columns).map(move |col| grid.tile_rect(row, col)))
    }

    // =========================================================================
    // Boundaries
    // =========================================================================

    /// X coordinates of every vertical page boundary, both outer edges included
    pub fn vertical_boundaries(&self) -> Vec<u32> {
        (0..=self.columns).map(|c| c * self.page_width_px).collect()
    }

    /// Y coordinates of every horizontal page boundary, both outer edges included
    pub fn horizontal_boundaries(&self) -> Vec<u32> {
        (0..=self.rows).map(|r| r * self.page_height_px).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covering_rounds_up() {
        let grid = PosterGrid::covering(1772, 3543, 1240, 1754);

        assert_eq!(grid.columns, 2);
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.page_count(), 6);
        assert_eq!(grid.canvas_width(), 2480);
        assert_eq!(grid.canvas_height(), 5262);
    }

    #[test]
    fn test_covering_exact_multiple() {
        let grid = PosterGrid::covering(2480, 1754, 1240, 1754);

        assert_eq!(grid.columns, 2);
        assert_eq!(grid.rows, 1);
    }

    #[test]
    fn test_covering_smaller_than_page() {
        let grid = PosterGrid::covering(10, 10, 1240, 1754);

        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows, 1);
        assert_eq!(grid.page_count(), 1);
    }

    #[test]
    fn test_tiles_row_major() {
        let grid = PosterGrid::covering(250, 150, 100, 100);
        let order: Vec<(u32, u32)> = grid.tiles().map(|t| (t.row, t.col)).collect();

        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_tile_rect() {
        let grid = PosterGrid::covering(250, 150, 100, 80);
        let rect = grid.tile_rect(1, 2);

        assert_eq!(rect.x, 200);
        assert_eq!(rect.y, 80);
        assert_eq!(rect.width, 100);
        assert_eq!(rect.height, 80);
    }

    #[test]
    fn test_boundaries_include_outer_edges() {
        let grid = PosterGrid::covering(250, 150, 100, 80);

        assert_eq!(grid.vertical_boundaries(), vec![0, 100, 200, 300]);
        assert_eq!(grid.horizontal_boundaries(), vec![0, 80, 160]);
    }
}
