//! Error types for wish map assembly
//!
//! Acquisition, decode and processing failures are recoverable per cell: the
//! composer swaps in a placeholder and carries on. Layout and output failures
//! are fatal to the whole assembly call.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all assembly operations
#[derive(Debug)]
pub enum WishMapError {
    /// Image bytes could not be obtained from their source
    ///
    /// Covers network errors, timeouts, non-success HTTP statuses and
    /// unreadable local files.
    Acquisition {
        /// URL or path the image was requested from
        location: String,
        /// Description of the failure
        reason: String,
    },

    /// Acquired bytes are not a decodable image
    Decode {
        /// URL or path the bytes came from
        location: String,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Crop or resize could not be applied to a decoded image
    Processing {
        /// Name of the processing step that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Image count is outside the supported grid range
    ImageCountOutOfRange {
        /// Number of images supplied
        count: usize,
        /// Smallest supported count
        min: usize,
        /// Largest supported count
        max: usize,
    },

    /// Image and label lists differ in length
    MismatchedInputs {
        /// Number of image sources supplied
        images: usize,
        /// Number of labels supplied
        labels: usize,
    },

    /// No images were supplied at all
    EmptyInput,

    /// Requested canvas leaves no room for the grid
    CanvasTooSmall {
        /// Requested canvas width
        width: u32,
        /// Requested canvas height
        height: u32,
        /// Which part of the layout ran out of space
        reason: String,
    },

    /// Output format key is not one of the known formats
    UnknownFormat {
        /// Key that was requested
        name: String,
        /// Keys that are accepted
        known: Vec<&'static str>,
    },

    /// User-supplied parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save the finished canvas
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The caller aborted the assembly before it finished
    Cancelled,
}

impl WishMapError {
    /// Whether the composer may recover from this error by substituting a placeholder
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Acquisition { .. } | Self::Decode { .. } | Self::Processing { .. }
        )
    }
}

impl fmt::Display for WishMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acquisition { location, reason } => {
                write!(f, "Failed to acquire image '{location}': {reason}")
            }
            Self::Decode { location, source } => {
                write!(f, "Failed to decode image '{location}': {source}")
            }
            Self::Processing { operation, reason } => {
                write!(f, "Image processing error in {operation}: {reason}")
            }
            Self::ImageCountOutOfRange { count, min, max } => {
                write!(
                    f,
                    "Unsupported image count {count}: expected between {min} and {max} images"
                )
            }
            Self::MismatchedInputs { images, labels } => {
                write!(
                    f,
                    "Got {images} images but {labels} labels: every image needs exactly one label"
                )
            }
            Self::EmptyInput => write!(f, "At least one image and label are required"),
            Self::CanvasTooSmall {
                width,
                height,
                reason,
            } => {
                write!(f, "Canvas {width}x{height} is too small: {reason}")
            }
            Self::UnknownFormat { name, known } => {
                write!(f, "Unknown format '{name}'. Use one of: {}", known.join(", "))
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Cancelled => write!(f, "Assembly was cancelled"),
        }
    }
}

impl std::error::Error for WishMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for assembly results
pub type Result<T> = std::result::Result<T, WishMapError>;

impl From<std::io::Error> for WishMapError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WishMapError {
    WishMapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a processing error
pub fn processing_error(operation: &'static str, reason: &impl ToString) -> WishMapError {
    WishMapError::Processing {
        operation,
        reason: reason.to_string(),
    }
}
