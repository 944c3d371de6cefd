//! Contourlet - Building blocks for the contourlet transform
//!
//! The contourlet transform combines a Laplacian pyramid with a directional
//! filter bank. This workspace currently provides the sample container and
//! the shear-lattice column resampling used between filter bank stages.
//!
//! # Example
//!
//! ```
//! use contourlet::DImage;
//! use contourlet::transform::{Direction, ResampleParams, resample_columns};
//!
//! let x = DImage::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let y = resample_columns(&x, &ResampleParams::new(Direction::Down, 1)).unwrap();
//! assert_eq!(y.column(1), vec![4.0, 2.0]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use contourlet_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use contourlet_transform as transform;
