pub mod constants;
pub mod export;
pub mod io;
pub mod layout;
mod options;
mod preview;
mod stats;
mod types;

pub use export::{
    Tile, document_title, download_filename, export_tiles, generate_pdf, reassemble_tiles,
    tile_rects, tiles_to_pdf_bytes,
};
pub use io::{decode_image, load_image, save_pdf, save_preview};
pub use layout::{PosterGrid, PosterLayout, PosterPlan, TileRect, compute_layout, plan};
pub use options::*;
pub use preview::{
    Preview, draw_grid_lines, generate_preview, render_preview, render_preview_owned,
};
pub use stats::{PosterStatistics, calculate_statistics};
pub use types::*;
