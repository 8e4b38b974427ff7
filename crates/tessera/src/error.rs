//! Error types for validated grid construction.

use std::error::Error;
use std::fmt;

/// Errors from the fallible [`Grid`](crate::Grid) constructors.
///
/// Coordinate access is not represented here: out-of-range coordinates
/// panic (see the `# Panics` sections on the accessors), and the
/// non-panicking forms return `Option` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// `width * height` does not fit in `usize`.
    SizeOverflow {
        /// Requested cell count per row.
        width: usize,
        /// Requested row count.
        height: usize,
    },
    /// A provided buffer's length does not match `width * height`.
    SizeMismatch {
        /// `width * height` for the requested dimensions.
        expected: usize,
        /// Length of the buffer actually provided.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOverflow { width, height } => {
                write!(f, "grid size {width} x {height} overflows usize")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {expected} cells, got {actual}"
                )
            }
        }
    }
}

impl Error for GridError {}
