//! Error types for grid construction, seeding and simulation output

use std::fmt;
use std::io;

/// Errors raised while setting up or running a simulation.
///
/// Advancing a grid never fails; everything here comes from construction,
/// pattern placement, configuration or writing the output.
#[derive(Debug)]
pub enum LifeError {
    /// Grid cannot hold the requested seed
    GridTooSmall {
        /// Side length of the grid
        size: usize,
        /// Minimum side length required
        required: usize,
    },

    /// Pattern placement would leave the grid
    PatternOutOfBounds {
        /// Name of the pattern being placed
        pattern: &'static str,
        /// Requested top-left row
        row: usize,
        /// Requested top-left column
        col: usize,
        /// Side length of the grid
        size: usize,
    },

    /// No preset with this name
    UnknownPattern {
        name: String,
    },

    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Writing rendered output failed
    Io(io::Error),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { size, required } => write!(
                f,
                "grid of size {size}x{size} is too small, need at least {required}x{required}"
            ),
            Self::PatternOutOfBounds {
                pattern,
                row,
                col,
                size,
            } => write!(
                f,
                "pattern '{pattern}' placed at ({row}, {col}) does not fit in a {size}x{size} grid"
            ),
            Self::UnknownPattern { name } => write!(f, "unknown pattern '{name}'"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "invalid {parameter} '{value}': {reason}"),
            Self::Io(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl std::error::Error for LifeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LifeError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LifeError>;
