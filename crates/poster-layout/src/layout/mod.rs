//! Layout calculation modules for posters
//!
//! This module handles all the geometric calculations for tiling:
//! - Grid sizing (how many pages cover the target, tile rectangles)
//! - Planning (unit conversion, scaling, centering, canvas composition)

mod grid;
mod planner;

pub use grid::*;
pub use planner::*;
