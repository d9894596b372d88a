//! Error types for maze construction, solving and export

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::Algorithm;
use crate::spatial::Cell;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Caller-supplied value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Raw mask data violates the grid invariants
    MalformedGrid {
        /// Description of the broken invariant
        reason: String,
    },

    /// Breadth-first search exhausted the reachable cells without reaching the target
    ///
    /// A completed maze is a spanning tree, so this only happens when the grid
    /// was not produced by a working construction algorithm.
    Unsolvable {
        /// Search origin
        from: Cell,
        /// Search target
        to: Cell,
        /// Number of cells reached before the queue ran dry
        explored: usize,
    },

    /// Construction did not finish within the iteration cap
    GenerationStalled {
        /// Algorithm that was running
        algorithm: Algorithm,
        /// Steps performed before giving up
        steps: usize,
        /// Iteration cap for the grid size
        limit: usize,
    },

    /// Operation requested before its prerequisites exist
    InvalidState {
        /// Operation that was refused
        operation: &'static str,
        /// Why it cannot run yet
        reason: String,
    },

    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
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
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MalformedGrid { reason } => {
                write!(f, "Malformed grid: {reason}")
            }
            Self::Unsolvable { from, to, explored } => {
                write!(
                    f,
                    "No path from {from} to {to} after exploring {explored} cells; the maze is not connected"
                )
            }
            Self::GenerationStalled {
                algorithm,
                steps,
                limit,
            } => {
                write!(
                    f,
                    "{algorithm} generation did not finish after {steps} steps (limit {limit})"
                )
            }
            Self::InvalidState { operation, reason } => {
                write!(f, "Cannot {operation}: {reason}")
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
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MazeError {
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
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid state error
pub fn invalid_state(operation: &'static str, reason: &impl ToString) -> MazeError {
    MazeError::InvalidState {
        operation,
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> MazeError {
    let path = path.into();
    move |source| MazeError::FileSystem {
        path,
        operation,
        source,
    }
}
