//! Error types for staging, tiling and cleanup operations

use crate::io::configuration::{EXIT_EXTRACTION_FAILED, EXIT_FAILURE, EXIT_MISSING_ARCHIVE};
use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilerError {
    /// The archive expected in the workspace does not exist
    MissingArchive {
        /// Path where the archive was looked for
        path: PathBuf,
    },

    /// The archive could not be opened or one of its entries could not be read
    Archive {
        /// Path to the archive
        path: PathBuf,
        /// Underlying archive error
        source: zip::result::ZipError,
    },

    /// Raw bytes could not be decoded as a bitmap
    ImageDecode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Image is too small to yield non-empty tiles
    ImageTooSmall {
        /// Path to the image file
        path: PathBuf,
        /// Decoded width in pixels
        width: u32,
        /// Decoded height in pixels
        height: u32,
    },

    /// A tile could not be encoded
    ImageEncode {
        /// Path the tile was destined for
        path: PathBuf,
        /// Underlying image encoding error
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

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl TilerError {
    /// Process exit status used when this error ends the run
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingArchive { .. } => EXIT_MISSING_ARCHIVE,
            Self::Archive { .. } => EXIT_EXTRACTION_FAILED,
            _ => EXIT_FAILURE,
        }
    }

    /// Message without the input path, for lines that already name it
    pub fn detail(&self) -> String {
        match self {
            Self::MissingArchive { .. } => "archive not found".to_string(),
            Self::Archive { source, .. } => source.to_string(),
            Self::ImageDecode { source, .. } => source.to_string(),
            Self::ImageTooSmall { width, height, .. } => {
                format!("too small to split ({width}x{height})")
            }
            Self::ImageEncode { path, source } => {
                format!("failed to encode '{}': {source}", path.display())
            }
            Self::FileSystem {
                operation, source, ..
            } => format!("{operation} failed: {source}"),
            Self::InvalidParameter { .. } => self.to_string(),
        }
    }
}

impl fmt::Display for TilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArchive { path } => {
                write!(f, "Missing archive '{}'", path.display())
            }
            Self::Archive { path, source } => {
                write!(f, "Failed to extract archive '{}': {source}", path.display())
            }
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::ImageTooSmall {
                path,
                width,
                height,
            } => {
                write!(
                    f,
                    "Image '{}' is too small to split ({width}x{height})",
                    path.display()
                )
            }
            Self::ImageEncode { path, source } => {
                write!(f, "Failed to encode tile '{}': {source}", path.display())
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for TilerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Archive { source, .. } => Some(source),
            Self::ImageDecode { source, .. } | Self::ImageEncode { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilerError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilerError {
    TilerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path and operation
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> TilerError {
    TilerError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
