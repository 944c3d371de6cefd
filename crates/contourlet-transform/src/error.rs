//! Error types for contourlet-transform

use thiserror::Error;

/// Errors that can occur during lattice resampling
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Direction flag is neither 0 (down) nor 1 (up)
    #[error("invalid direction flag {0}: must be 0 (down) or 1 (up)")]
    InvalidDirection(i32),

    /// Extension mode other than periodic (`"per"`), named as given
    #[error("unsupported extension mode '{0}': only 'per' is implemented")]
    UnsupportedExtensionMode(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
