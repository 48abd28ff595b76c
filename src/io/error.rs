//! Error types for tile set construction, generation runs and file I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// A tile definition does not hold exactly nine categories
    InvalidTileDefinition {
        /// Position of the definition in the build input
        index: usize,
        /// Number of categories supplied
        len: usize,
    },

    /// The same category grid appears twice in one tile set build
    DuplicateTile {
        /// Position of the repeated definition
        index: usize,
        /// Position where the definition first appeared
        first: usize,
    },

    /// Category code outside the known terrain kinds
    InvalidCategory {
        /// The unknown code
        code: u8,
    },

    /// Tile id exceeds the tile set, or is not a candidate where required
    InvalidTileIndex {
        /// The invalid tile id
        index: usize,
        /// Number of tiles available
        max_tiles: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A cell was left without candidates
    ///
    /// Generation is a pure function of its inputs, so the same tile set,
    /// dimensions, boundary and seed will fail the same way again.
    Contradiction {
        /// Cell whose candidate set became empty
        coordinate: [usize; 2],
        /// Seed of the failed run
        seed: u64,
        /// Collapses performed before detection
        step: usize,
    },

    /// Failed to load an image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Tile set definition could not be encoded or decoded
    Serialization {
        /// File involved, empty for in-memory data
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// File system operation failed
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Operation being performed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileDefinition { index, len } => {
                write!(
                    f,
                    "Tile definition {index} has {len} categories, expected exactly 9"
                )
            }
            Self::DuplicateTile { index, first } => {
                write!(f, "Tile definition {index} duplicates tile {first}")
            }
            Self::InvalidCategory { code } => {
                write!(f, "Unknown terrain category code {code}")
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(
                    f,
                    "Invalid tile index {index} (tile set has {max_tiles} tiles)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Contradiction {
                coordinate,
                seed,
                step,
            } => {
                write!(
                    f,
                    "Contradiction at cell ({}, {}) after {step} collapses with seed {seed}",
                    coordinate[0], coordinate[1]
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export image to '{}': {source}", path.display())
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Invalid tile set data in '{}': {source}",
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
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<serde_json::Error> for AlgorithmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            path: PathBuf::new(),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation it came from
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> AlgorithmError {
    let path = path.into();
    move |source| AlgorithmError::FileSystem {
        path,
        operation,
        source,
    }
}
