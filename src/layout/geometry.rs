//! Canvas partitioning into title band, margins and the cell grid

use crate::io::configuration::ComposerConfig;
use crate::io::error::{Result, WishMapError};
use crate::layout::grid::{BoundingBox, GridPlan};

/// Resolved geometry for one canvas and image count
///
/// The grid area is the canvas minus the margins on every side and the title
/// band. Every cell image has the same size: the grid area divided by the
/// grid shape after removing the inter-cell padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasLayout {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Top-left corner of the grid area on the canvas
    pub grid_origin: (u32, u32),
    /// Size of the grid area as (width, height)
    pub grid_area: (u32, u32),
    /// Uniform size of every cell image as (width, height)
    pub cell_size: (u32, u32),
    /// Grid shape and per-cell boxes relative to `grid_origin`
    pub plan: GridPlan,
}

impl CanvasLayout {
    /// Compute the layout for `count` images on a `width` x `height` canvas
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `count` is outside the supported grid range
    /// - The margins and title band leave no grid area
    /// - The padding leaves no room for a cell in either direction
    pub fn compute(
        config: &ComposerConfig,
        count: usize,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let too_small = |reason: &str| WishMapError::CanvasTooSmall {
            width,
            height,
            reason: reason.to_string(),
        };

        let margins = config.margin.checked_mul(2);
        let area_w = margins
            .and_then(|m| width.checked_sub(m))
            .filter(|&w| w > 0)
            .ok_or_else(|| too_small("margins exceed the canvas width"))?;
        let area_h = margins
            .and_then(|m| m.checked_add(config.title_height))
            .and_then(|reserved| height.checked_sub(reserved))
            .filter(|&h| h > 0)
            .ok_or_else(|| too_small("margins and title band exceed the canvas height"))?;

        let plan = GridPlan::new(count, area_w, area_h)?;

        let cell_w = (plan.cols - 1)
            .checked_mul(config.padding)
            .and_then(|gaps| area_w.checked_sub(gaps))
            .map(|w| w / plan.cols)
            .filter(|&w| w > 0)
            .ok_or_else(|| too_small("cell padding leaves no room for cell width"))?;
        let cell_h = (plan.rows - 1)
            .checked_mul(config.padding)
            .and_then(|gaps| area_h.checked_sub(gaps))
            .map(|h| h / plan.rows)
            .filter(|&h| h > 0)
            .ok_or_else(|| too_small("cell padding leaves no room for cell height"))?;

        Ok(Self {
            width,
            height,
            grid_origin: (config.margin, config.margin + config.title_height),
            grid_area: (area_w, area_h),
            cell_size: (cell_w, cell_h),
            plan,
        })
    }

    /// Canvas position of a cell's top-left corner
    pub const fn cell_origin(&self, cell: &BoundingBox) -> (u32, u32) {
        (self.grid_origin.0 + cell.x0, self.grid_origin.1 + cell.y0)
    }
}
