//! Column resampling on a shear lattice
//!
//! This module shuffles the samples of each image column by an amount
//! proportional to the column index, which is the sampling-lattice change
//! used between the directional filter bank stages of a contourlet
//! transform.
//!
//! # Periodic extension
//!
//! With `m` rows, column `j` of the output is column `j` of the input
//! rotated circularly, reading from row `k = (±shift * j) mod m` onwards:
//!
//! ```text
//! y[i, j] = x[(k + i) mod m, j]
//! ```
//!
//! The result is a permutation of every column; no sample crosses into
//! another column and no value is synthesized.
//!
//! # Example
//!
//! ```
//! use contourlet_core::Image;
//! use contourlet_transform::{ResampleParams, resample_columns};
//!
//! let x = Image::from_rows(&[
//!     vec![10, 1],
//!     vec![20, 2],
//!     vec![30, 3],
//!     vec![40, 4],
//! ])
//! .unwrap();
//!
//! // Default parameters: down, shift 1, periodic
//! let y = resample_columns(&x, &ResampleParams::default()).unwrap();
//! assert_eq!(y.column(0), vec![10, 20, 30, 40]);
//! assert_eq!(y.column(1), vec![2, 3, 4, 1]);
//! ```

use crate::lattice::{Direction, ShearMatrix};
use crate::{TransformError, TransformResult};
use contourlet_core::Image;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Types
// ============================================================================

/// Boundary extension applied along the resampled columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtensionMode {
    /// Wrap rows modulo the image height (`"per"`)
    #[default]
    Periodic,
    /// Reflect about the edge samples (`"ref1"`)
    Reflect1,
    /// Reflect, doubling the edge samples (`"ref2"`)
    Reflect2,
}

impl ExtensionMode {
    /// The short name used at the string boundary
    pub fn as_str(self) -> &'static str {
        match self {
            ExtensionMode::Periodic => "per",
            ExtensionMode::Reflect1 => "ref1",
            ExtensionMode::Reflect2 => "ref2",
        }
    }

    /// Whether resampling has an implementation for this mode
    pub fn is_supported(self) -> bool {
        matches!(self, ExtensionMode::Periodic)
    }
}

impl fmt::Display for ExtensionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtensionMode {
    type Err = TransformError;

    fn from_str(s: &str) -> TransformResult<Self> {
        match s {
            "per" => Ok(ExtensionMode::Periodic),
            "ref1" => Ok(ExtensionMode::Reflect1),
            "ref2" => Ok(ExtensionMode::Reflect2),
            _ => Err(TransformError::UnsupportedExtensionMode(s.to_string())),
        }
    }
}

/// Parameters for [`resample_columns`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleParams {
    /// Sign of the per-column shift
    pub direction: Direction,
    /// Rows of rotation added per column
    pub shift: i64,
    /// Boundary extension mode
    pub mode: ExtensionMode,
}

impl Default for ResampleParams {
    fn default() -> Self {
        Self {
            direction: Direction::Down,
            shift: 1,
            mode: ExtensionMode::Periodic,
        }
    }
}

impl ResampleParams {
    /// Create parameters for a direction and shift with periodic extension
    pub fn new(direction: Direction, shift: i64) -> Self {
        Self {
            direction,
            shift,
            ..Default::default()
        }
    }

    /// Set the direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the shift amount
    pub fn with_shift(mut self, shift: i64) -> Self {
        self.shift = shift;
        self
    }

    /// Set the extension mode
    pub fn with_mode(mut self, mode: ExtensionMode) -> Self {
        self.mode = mode;
        self
    }

    /// The lattice matrix these parameters realize
    pub fn shear_matrix(&self) -> ShearMatrix {
        ShearMatrix::new(self.direction, self.shift)
    }

    /// Parameters whose periodic resampling undoes this one
    pub fn inverse(&self) -> Self {
        self.with_direction(self.direction.reverse())
    }
}

// ============================================================================
// Resampling
// ============================================================================

/// Resample along the columns of an image
///
/// Every column `j` is rotated circularly so that output row 0 holds input
/// row `(±shift * j) mod height`. The input is left untouched and the output
/// has the same shape and sample type.
///
/// # Arguments
/// * `image` - Input image, any sample type
/// * `params` - Direction, shift and extension mode
///
/// # Errors
/// Returns `TransformError::UnsupportedExtensionMode` for the reflective
/// modes, which have no implementation.
pub fn resample_columns<T>(
    image: &Image<T>,
    params: &ResampleParams,
) -> TransformResult<Image<T>>
where
    T: Copy + Default,
{
    if !params.mode.is_supported() {
        log::warn!("column resampling rejected extension mode '{}'", params.mode);
        return Err(TransformError::UnsupportedExtensionMode(
            params.mode.to_string(),
        ));
    }

    let (w, h) = image.dimensions();
    log::trace!(
        "resampling {}x{} columns: direction={:?} shift={} mode={}",
        w,
        h,
        params.direction,
        params.shift,
        params.mode
    );

    let lattice = params.shear_matrix();
    let mut out = image.create_template();

    for x in 0..w {
        let mut k = lattice.row_offset(x, h);
        for y in 0..h {
            if k >= h {
                k -= h;
            }
            out.set_pixel_unchecked(x, y, image.get_pixel_unchecked(x, k));
            k += 1;
        }
    }

    Ok(out)
}

/// Resample along the columns using flag and string arguments
///
/// This is the loosely typed entry point for callers that carry the
/// direction as an integer flag and the extension mode as a name.
///
/// # Arguments
/// * `image` - Input image
/// * `type_` - 0 to shuffle down, 1 to shuffle up
/// * `shift` - Amount of shift per column (typically 1)
/// * `extmod` - `"per"` (periodic), `"ref1"` or `"ref2"`
///
/// # Errors
/// - `TransformError::InvalidDirection` if `type_` is not 0 or 1
/// - `TransformError::UnsupportedExtensionMode` for any `extmod` other
///   than `"per"`, including `"ref1"` and `"ref2"`
///
/// # Example
/// ```
/// use contourlet_core::Image;
/// use contourlet_transform::{TransformError, resampc};
///
/// let x = Image::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let y = resampc(&x, 1, 1, "per").unwrap();
/// assert_eq!(y.column(1), vec![4.0, 2.0]);
///
/// assert_eq!(
///     resampc(&x, 2, 1, "per").unwrap_err(),
///     TransformError::InvalidDirection(2)
/// );
/// ```
pub fn resampc<T>(
    image: &Image<T>,
    type_: i32,
    shift: i64,
    extmod: &str,
) -> TransformResult<Image<T>>
where
    T: Copy + Default,
{
    let direction = Direction::try_from(type_).inspect_err(|_| {
        log::warn!("resampc: direction flag must be 0 or 1, got {}", type_);
    })?;
    let mode = extmod.parse::<ExtensionMode>().inspect_err(|_| {
        log::warn!("resampc: unsupported extension mode '{}'", extmod);
    })?;

    let params = ResampleParams {
        direction,
        shift,
        mode,
    };
    resample_columns(image, &params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32) -> Image<i32> {
        let data = (0..(width * height) as i32).collect();
        Image::from_data(width, height, data).unwrap()
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("per".parse::<ExtensionMode>().unwrap(), ExtensionMode::Periodic);
        assert_eq!("ref1".parse::<ExtensionMode>().unwrap(), ExtensionMode::Reflect1);
        assert_eq!("ref2".parse::<ExtensionMode>().unwrap(), ExtensionMode::Reflect2);
        assert_eq!(
            "PER".parse::<ExtensionMode>().unwrap_err(),
            TransformError::UnsupportedExtensionMode("PER".to_string())
        );
        assert!("".parse::<ExtensionMode>().is_err());
    }

    #[test]
    fn test_mode_display_roundtrip() {
        for mode in [
            ExtensionMode::Periodic,
            ExtensionMode::Reflect1,
            ExtensionMode::Reflect2,
        ] {
            assert_eq!(mode.to_string().parse::<ExtensionMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_params_builders() {
        let params = ResampleParams::default();
        assert_eq!(params.direction, Direction::Down);
        assert_eq!(params.shift, 1);
        assert_eq!(params.mode, ExtensionMode::Periodic);

        let params = ResampleParams::new(Direction::Up, 3).with_mode(ExtensionMode::Reflect2);
        assert_eq!(params.shift, 3);
        assert_eq!(params.mode, ExtensionMode::Reflect2);
        assert_eq!(params.inverse().direction, Direction::Down);
        assert_eq!(params.inverse().shift, 3);
        assert_eq!(params.shear_matrix().matrix(), [[1, -3], [0, 1]]);
        assert_eq!(params.with_shift(-1).shift, -1);
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let x = ramp(5, 4);
        for direction in [Direction::Down, Direction::Up] {
            let y = resample_columns(&x, &ResampleParams::new(direction, 0)).unwrap();
            assert_eq!(y, x);
        }
    }

    #[test]
    fn test_shift_by_height_is_identity() {
        let x = ramp(3, 4);
        let y = resample_columns(&x, &ResampleParams::new(Direction::Down, 4)).unwrap();
        assert_eq!(y, x);
    }

    #[test]
    fn test_down_fixture() {
        // Column j is x[(j + i) mod 3, j]
        let x = Image::from_rows(&[vec![0, 10, 20], vec![1, 11, 21], vec![2, 12, 22]]).unwrap();
        let y = resample_columns(&x, &ResampleParams::new(Direction::Down, 1)).unwrap();
        let expected =
            Image::from_rows(&[vec![0, 11, 22], vec![1, 12, 20], vec![2, 10, 21]]).unwrap();
        assert_eq!(y, expected);
    }

    #[test]
    fn test_up_fixture() {
        // Column j is x[(i - j) mod 3, j]
        let x = Image::from_rows(&[vec![0, 10, 20], vec![1, 11, 21], vec![2, 12, 22]]).unwrap();
        let y = resample_columns(&x, &ResampleParams::new(Direction::Up, 1)).unwrap();
        let expected =
            Image::from_rows(&[vec![0, 12, 21], vec![1, 10, 22], vec![2, 11, 20]]).unwrap();
        assert_eq!(y, expected);
    }

    #[test]
    fn test_up_inverts_down() {
        let x = ramp(7, 5);
        for shift in [-3, 1, 2, 9] {
            let params = ResampleParams::new(Direction::Down, shift);
            let y = resample_columns(&x, &params).unwrap();
            let back = resample_columns(&y, &params.inverse()).unwrap();
            assert_eq!(back, x, "shift {shift}");
        }
    }

    #[test]
    fn test_negative_shift_equals_opposite_direction() {
        let x = ramp(6, 4);
        let a = resample_columns(&x, &ResampleParams::new(Direction::Down, -2)).unwrap();
        let b = resample_columns(&x, &ResampleParams::new(Direction::Up, 2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_row_and_single_column() {
        let row = Image::from_rows(&[vec![1.5, 2.5, 3.5]]).unwrap();
        let y = resample_columns(&row, &ResampleParams::new(Direction::Up, 5)).unwrap();
        assert_eq!(y, row);

        let col = Image::from_rows(&[vec![1], vec![2], vec![3]]).unwrap();
        let y = resample_columns(&col, &ResampleParams::new(Direction::Down, 1)).unwrap();
        assert_eq!(y, col);
    }

    #[test]
    fn test_input_not_mutated() {
        let x = ramp(4, 4);
        let before = x.clone();
        let _ = resample_columns(&x, &ResampleParams::new(Direction::Down, 1)).unwrap();
        assert_eq!(x, before);
    }

    #[test]
    fn test_reflective_modes_unsupported() {
        let x = ramp(3, 3);
        for mode in [ExtensionMode::Reflect1, ExtensionMode::Reflect2] {
            let params = ResampleParams::default().with_mode(mode);
            assert_eq!(
                resample_columns(&x, &params).unwrap_err(),
                TransformError::UnsupportedExtensionMode(mode.to_string())
            );
        }
    }

    #[test]
    fn test_resampc_errors() {
        let x = ramp(3, 3);
        assert_eq!(
            resampc(&x, 2, 1, "per").unwrap_err(),
            TransformError::InvalidDirection(2)
        );
        assert_eq!(
            resampc(&x, 0, 1, "foo").unwrap_err(),
            TransformError::UnsupportedExtensionMode("foo".to_string())
        );
        assert_eq!(
            resampc(&x, 1, 1, "ref1").unwrap_err(),
            TransformError::UnsupportedExtensionMode("ref1".to_string())
        );
        // Direction is validated before the mode
        assert_eq!(
            resampc(&x, -1, 1, "foo").unwrap_err(),
            TransformError::InvalidDirection(-1)
        );
    }

    #[test]
    fn test_resampc_matches_typed_call() {
        let x = ramp(5, 3);
        let typed = resample_columns(&x, &ResampleParams::new(Direction::Up, 2)).unwrap();
        assert_eq!(resampc(&x, 1, 2, "per").unwrap(), typed);
    }
}
