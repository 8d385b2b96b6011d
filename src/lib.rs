//! Adaptive grid collage assembly for labeled wish maps
//!
//! A wish map is a single PNG: a title band above a grid of 3-9 square
//! images, each captioned with its label. Images are fetched or read, cropped
//! to square and resized to a uniform cell size. Any image that cannot be
//! obtained is replaced by a gradient placeholder so that one bad source
//! never sinks the whole map.

#![forbid(unsafe_code)]

/// Top-level assembly of the final canvas
pub mod compose;
/// Input/output operations, configuration and error handling
pub mod io;
/// Output formats, grid planning and canvas geometry
pub mod layout;
/// Fonts, text, placeholders and image normalization
pub mod render;

pub use compose::{CancelFlag, CellOutcome, Composer, WishMap};
pub use io::configuration::ComposerConfig;
pub use io::error::{Result, WishMapError};
pub use io::source::{HttpFetcher, ImageFetcher, WishItem, WishSource};
pub use layout::Format;
