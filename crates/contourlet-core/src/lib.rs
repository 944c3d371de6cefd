//! Contourlet Core - Basic data structures for the contourlet transform
//!
//! This crate provides the fundamental data structures shared by the
//! contourlet crates:
//!
//! - [`Image`] - Generic two-dimensional sample array
//! - [`FImage`] / [`DImage`] - `f32` / `f64` images
//! - [`Error`] / [`Result`] - Core error handling

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{DImage, FImage, Image};
