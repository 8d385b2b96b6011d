//! Text measurement and drop-shadowed drawing

use crate::io::configuration::SHADOW_OFFSET;
use crate::render::font::Typeface;
use ab_glyph::PxScale;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// Shadow colour drawn behind light text
pub const SHADOW: Rgb<u8> = Rgb([0, 0, 0]);
/// Colour of label and placeholder text
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
/// Colour of the map title
pub const TITLE_GRAY: Rgb<u8> = Rgb([30, 30, 30]);

/// Rendered size of `text` as (width, height) in pixels
///
/// The glyphless typeface measures every string as zero.
pub fn measure(typeface: &Typeface, size_px: u32, text: &str) -> (u32, u32) {
    match typeface.font() {
        Some(font) if !text.is_empty() => text_size(PxScale::from(size_px as f32), font, text),
        _ => (0, 0),
    }
}

/// Draw `text` with its top-left corner at (x, y)
///
/// Pixels falling outside the canvas are clipped, so overlong text overflows
/// silently.
pub fn draw(
    canvas: &mut RgbImage,
    typeface: &Typeface,
    color: Rgb<u8>,
    size_px: u32,
    position: (i32, i32),
    text: &str,
) {
    if let Some(font) = typeface.font() {
        draw_text_mut(
            canvas,
            color,
            position.0,
            position.1,
            PxScale::from(size_px as f32),
            font,
            text,
        );
    }
}

/// Draw white `text` over a black shadow offset down and to the right
pub fn draw_shadowed(
    canvas: &mut RgbImage,
    typeface: &Typeface,
    size_px: u32,
    position: (i32, i32),
    text: &str,
) {
    let (x, y) = position;
    draw(
        canvas,
        typeface,
        SHADOW,
        size_px,
        (x + SHADOW_OFFSET, y + SHADOW_OFFSET),
        text,
    );
    draw(canvas, typeface, WHITE, size_px, position, text);
}

/// Left offset that centres a span of `inner` pixels within `outer` pixels
///
/// Negative when the span is wider than the container.
pub fn centered_offset(outer: u32, inner: u32) -> i32 {
    (i64::from(outer) - i64::from(inner)).div_euclid(2) as i32
}

/// Keep at most `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(index, _)| text.get(..index).unwrap_or(text))
}
