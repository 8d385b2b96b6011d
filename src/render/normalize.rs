//! Decoding, square cropping and resizing of acquired images

use crate::io::configuration::SQUARE_TOLERANCE;
use crate::io::error::{Result, WishMapError, processing_error};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use tracing::warn;

/// Decode raw bytes into an image, guessing the container format
///
/// # Errors
///
/// Returns [`WishMapError::Decode`] if the bytes are not a supported image
pub fn decode(location: &str, bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| WishMapError::Decode {
        location: location.to_string(),
        source: e,
    })
}

/// Whether a `width` x `height` image counts as square
pub fn is_square(width: u32, height: u32) -> bool {
    height != 0 && (f64::from(width) / f64::from(height) - 1.0).abs() <= SQUARE_TOLERANCE
}

/// Crop the largest centred square out of `img`
pub fn crop_to_square(img: &RgbImage) -> RgbImage {
    let (width, height) = img.dimensions();
    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;
    imageops::crop_imm(img, left, top, side, side).to_image()
}

/// Force a decoded image to RGB, square it, and resize it to `target`
///
/// Images already within 1% of square are resized without cropping.
/// Resizing uses a Lanczos filter.
///
/// # Errors
///
/// Returns [`WishMapError::Processing`] if the source image or the target
/// size has a zero dimension
pub fn normalize(img: &DynamicImage, target: (u32, u32)) -> Result<RgbImage> {
    let (target_w, target_h) = target;
    if target_w == 0 || target_h == 0 {
        return Err(processing_error(
            "resize",
            &format!("target size {target_w}x{target_h} is empty"),
        ));
    }
    if img.width() == 0 || img.height() == 0 {
        return Err(processing_error(
            "crop",
            &format!("source image {}x{} is empty", img.width(), img.height()),
        ));
    }

    let rgb = img.to_rgb8();
    let squared = if is_square(rgb.width(), rgb.height()) {
        rgb
    } else {
        warn!(
            width = rgb.width(),
            height = rgb.height(),
            "image is not square, cropping to centre"
        );
        crop_to_square(&rgb)
    };

    if squared.dimensions() == target {
        return Ok(squared);
    }
    Ok(imageops::resize(
        &squared,
        target_w,
        target_h,
        FilterType::Lanczos3,
    ))
}

/// Decode `bytes` and normalize the result to `target`
///
/// # Errors
///
/// Returns an error if decoding or normalization fails
pub fn normalize_bytes(location: &str, bytes: &[u8], target: (u32, u32)) -> Result<RgbImage> {
    let img = decode(location, bytes)?;
    normalize(&img, target)
}
