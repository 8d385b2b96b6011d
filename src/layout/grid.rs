//! Grid selection and cell placement for 3-9 images
//!
//! Grid shapes come from a fixed table rather than a search: the supported
//! range is small and the exact shapes are part of the output contract.
//! Cells are sized by integer division and any remainder pixels are left as
//! unused margin on the right and bottom edges.

use crate::io::configuration::{MAX_IMAGES, MIN_IMAGES};
use crate::io::error::{Result, WishMapError};

/// Pixel rectangle relative to the grid origin
///
/// `x1` and `y1` are exclusive, so the box spans `x1 - x0` by `y1 - y0` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Left edge (inclusive)
    pub x0: u32,
    /// Top edge (inclusive)
    pub y0: u32,
    /// Right edge (exclusive)
    pub x1: u32,
    /// Bottom edge (exclusive)
    pub y1: u32,
}

impl BoundingBox {
    /// Box width in pixels
    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Box height in pixels
    pub const fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Check whether two boxes share any pixel
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }
}

/// Check an image count against the supported range
///
/// # Errors
///
/// Returns [`WishMapError::ImageCountOutOfRange`] when `count` is outside
/// `MIN_IMAGES..=MAX_IMAGES`
pub const fn validate_wish_count(count: usize) -> Result<()> {
    if count < MIN_IMAGES || count > MAX_IMAGES {
        return Err(WishMapError::ImageCountOutOfRange {
            count,
            min: MIN_IMAGES,
            max: MAX_IMAGES,
        });
    }
    Ok(())
}

/// Pick (rows, cols) for the given image count
///
/// 3 stacks vertically, 4 is a square, 5-6 use two rows of three and 7-9 fill
/// a 3x3 grid.
///
/// # Errors
///
/// Returns [`WishMapError::ImageCountOutOfRange`] for counts outside 3-9
pub const fn choose_grid(count: usize) -> Result<(u32, u32)> {
    match count {
        3 => Ok((3, 1)),
        4 => Ok((2, 2)),
        5 | 6 => Ok((2, 3)),
        7..=9 => Ok((3, 3)),
        _ => Err(WishMapError::ImageCountOutOfRange {
            count,
            min: MIN_IMAGES,
            max: MAX_IMAGES,
        }),
    }
}

/// Divide an area into `rows` x `cols` equal cells and return the first `count` of them
///
/// Boxes are emitted row-major and emission stops once `count` boxes exist,
/// so trailing grid slots get no box at all. An area too small to give every
/// cell at least one pixel in each direction yields no boxes.
pub fn place_cells(
    rows: u32,
    cols: u32,
    canvas_w: u32,
    canvas_h: u32,
    count: usize,
) -> Vec<BoundingBox> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let cell_w = canvas_w / cols;
    let cell_h = canvas_h / rows;
    if cell_w == 0 || cell_h == 0 {
        return Vec::new();
    }

    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .take(count)
        .map(|(row, col)| {
            let x0 = col * cell_w;
            let y0 = row * cell_h;
            BoundingBox {
                x0,
                y0,
                x1: x0 + cell_w,
                y1: y0 + cell_h,
            }
        })
        .collect()
}

/// Grid shape and cell boxes for one assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlan {
    /// Number of grid rows
    pub rows: u32,
    /// Number of grid columns
    pub cols: u32,
    /// One box per image, row-major
    pub boxes: Vec<BoundingBox>,
}

impl GridPlan {
    /// Plan a grid for `count` images inside an area of `area_w` x `area_h`
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is outside 3-9
    pub fn new(count: usize, area_w: u32, area_h: u32) -> Result<Self> {
        let (rows, cols) = choose_grid(count)?;
        let boxes = place_cells(rows, cols, area_w, area_h, count);
        Ok(Self { rows, cols, boxes })
    }

    /// Number of slots in the grid, used or not
    pub const fn capacity(&self) -> usize {
        (self.rows * self.cols) as usize
    }

    /// Number of grid slots left without a box
    pub fn unused_slots(&self) -> usize {
        self.capacity() - self.boxes.len()
    }
}
