//! PNG encoding and all-or-nothing file output

use crate::io::error::{Result, WishMapError};
use image::{ImageFormat, RgbImage};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Encode an image as PNG in memory
///
/// # Errors
///
/// Returns [`WishMapError::ImageExport`] if encoding fails
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| WishMapError::ImageExport {
            path: PathBuf::from("<memory>"),
            source: e,
        })?;
    Ok(buffer.into_inner())
}

/// Write an image to `path` as PNG, creating parent directories first
///
/// The PNG is written to a temporary file next to `path` and renamed into
/// place, so `path` either holds the complete image or is left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded
/// - The temporary file cannot be written or moved into place
pub fn write_png(img: &RgbImage, path: &Path) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(parent).map_err(|e| WishMapError::FileSystem {
        path: parent.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let bytes = encode_png(img).map_err(|e| match e {
        WishMapError::ImageExport { source, .. } => WishMapError::ImageExport {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    let mut staging = NamedTempFile::new_in(parent).map_err(|e| WishMapError::FileSystem {
        path: parent.to_path_buf(),
        operation: "create temporary file",
        source: e,
    })?;
    staging
        .write_all(&bytes)
        .and_then(|()| staging.flush())
        .map_err(|e| WishMapError::FileSystem {
            path: staging.path().to_path_buf(),
            operation: "write",
            source: e,
        })?;
    staging
        .persist(path)
        .map_err(|e| WishMapError::FileSystem {
            path: path.to_path_buf(),
            operation: "persist",
            source: e.error,
        })?;

    Ok(())
}
