//! Errors raised while building or indexing an [`Image`](crate::Image)

use thiserror::Error;

/// Error type for image construction and sample access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero
    #[error("image must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Sample coordinates fall outside the image
    #[error("sample index {index} out of range for {len} samples")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Rows of differing lengths
    #[error("ragged rows: expected {}x{}, found a row giving {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Data does not fit the requested shape
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result alias for image operations
pub type Result<T> = std::result::Result<T, Error>;
