//! Raster operations: fonts, text, placeholders and image normalization

/// Ordered font sources and the resolved typeface
pub mod font;
/// Decode, crop-to-square and resize of acquired images
pub mod normalize;
/// Gradient placeholder generation
pub mod placeholder;
/// Text measurement and shadowed drawing
pub mod text;

pub use font::{FontSource, Typeface};
pub use normalize::normalize;
pub use placeholder::create_placeholder;
