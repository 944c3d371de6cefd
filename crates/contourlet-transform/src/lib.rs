//! contourlet-transform - Lattice resampling for the contourlet transform
//!
//! This crate provides the sampling-lattice changes applied between
//! directional filter bank stages:
//!
//! - Shear lattice matrices `[[1, ±s], [0, 1]]` ([`ShearMatrix`])
//! - Column resampling with periodic extension ([`resample_columns`])
//! - A flag/string entry point mirroring the classic call form ([`resampc`])

mod error;
pub mod lattice;
pub mod resample;

pub use error::{TransformError, TransformResult};
pub use lattice::{Direction, ShearMatrix};
pub use resample::{ExtensionMode, ResampleParams, resampc, resample_columns};
