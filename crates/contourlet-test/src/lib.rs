//! contourlet-test - Regression test framework for the contourlet crates
//!
//! Each regression test creates a [`RegParams`], records a sequence of
//! numbered checks, and asserts on [`RegParams::cleanup`]. Two modes are
//! supported:
//!
//! - **Compare**: Run every check and record failures (default)
//! - **Display**: Same checks, and dump each image under test to stderr
//!
//! # Usage
//!
//! ```ignore
//! use contourlet_test::RegParams;
//!
//! let mut rp = RegParams::new("resampc");
//! rp.compare_values(4.0, image.height() as f64, 0.0);
//! rp.compare_images(&expected, &actual);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod params;

pub use params::{RegParams, RegTestMode};
