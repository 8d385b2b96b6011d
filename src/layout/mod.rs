//! Canvas layout: output formats, grid planning and cell geometry

/// Named output formats and their pixel sizes
pub mod format;
/// Canvas partitioning into title band, margins and cells
pub mod geometry;
/// Grid shape selection and cell placement
pub mod grid;

pub use format::Format;
pub use geometry::CanvasLayout;
pub use grid::{BoundingBox, GridPlan, choose_grid, place_cells, validate_wish_count};
