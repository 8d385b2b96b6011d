//! Gradient placeholders substituted for unavailable images
//!
//! The gradient is a pure function of the scanline and the image height, so
//! two placeholders of the same size are always pixel-identical.

use crate::io::configuration::{
    PLACEHOLDER_FONT_DIVISOR, PLACEHOLDER_FONT_MAX, PLACEHOLDER_FONT_MIN,
};
use crate::io::error::Result;
use crate::io::output::write_png;
use crate::render::font::Typeface;
use crate::render::text::{centered_offset, draw_shadowed, measure};
use image::{Rgb, RgbImage};
use std::path::Path;

/// Colour of scanline `y` in an image `height` pixels tall
///
/// Runs from (150, 150, 200) at the top towards (200, 200, 230) at the bottom.
pub fn gradient_color(y: u32, height: u32) -> Rgb<u8> {
    let t = if height == 0 {
        0.0
    } else {
        f64::from(y) / f64::from(height)
    };
    let rg = 50.0f64.mul_add(t, 150.0) as u8;
    let b = 30.0f64.mul_add(t, 200.0) as u8;
    Rgb([rg, rg, b])
}

/// Font size for a placeholder caption
pub fn caption_font_size(width: u32, height: u32) -> u32 {
    (width / PLACEHOLDER_FONT_DIVISOR)
        .min(height / PLACEHOLDER_FONT_DIVISOR)
        .min(PLACEHOLDER_FONT_MAX)
        .max(PLACEHOLDER_FONT_MIN)
}

/// Build a vertical-gradient image with an optional centred, shadowed caption
///
/// Captions wider than the image overflow and are clipped at the edges.
pub fn create_placeholder(width: u32, height: u32, text: &str, typeface: &Typeface) -> RgbImage {
    let mut img = RgbImage::from_fn(width, height, |_, y| gradient_color(y, height));

    if !text.is_empty() {
        let size = caption_font_size(width, height);
        let (text_w, text_h) = measure(typeface, size, text);
        let x = centered_offset(width, text_w);
        let y = centered_offset(height, text_h);
        draw_shadowed(&mut img, typeface, size, (x, y), text);
    }

    img
}

/// Generate a placeholder and write it to `path` as PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the PNG
/// cannot be written
pub fn save_placeholder(
    path: &Path,
    width: u32,
    height: u32,
    text: &str,
    typeface: &Typeface,
) -> Result<RgbImage> {
    let img = create_placeholder(width, height, text, typeface);
    write_png(&img, path)?;
    Ok(img)
}
