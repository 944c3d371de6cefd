//! Image - Generic two-dimensional sample array
//!
//! `Image<T>` holds one sample of type `T` per pixel. It is the container
//! passed through the contourlet stages: subband coefficients are usually
//! `f64` ([`DImage`]) or `f32` ([`FImage`]), but integer images work just as
//! well for lossless index manipulation.
//!
//! Following matrix convention, an image with `height` rows and `width`
//! columns is an `m x n` array with `m = height` and `n = width`.
//!
//! # Examples
//!
//! ```
//! use contourlet_core::DImage;
//!
//! let mut image = DImage::new(4, 3).unwrap();
//! image.set_pixel(1, 2, 0.5).unwrap();
//! assert_eq!(image.get_pixel(1, 2).unwrap(), 0.5);
//! assert_eq!(image.column(1), vec![0.0, 0.0, 0.5]);
//! ```

use crate::error::{Error, Result};

/// Single-precision image
pub type FImage = Image<f32>;

/// Double-precision image
pub type DImage = Image<f64>;

/// Two-dimensional sample array
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The sample at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    /// Number of columns
    width: u32,
    /// Number of rows
    height: u32,
    /// Sample data (row-major, no padding)
    data: Vec<T>,
}

impl<T: Copy + Default> Image<T> {
    /// Create a new image with all samples set to `T::default()`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, T::default())
    }

    /// Create a new image with all samples set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: T) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(Image {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create an image from raw row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(Image {
            width,
            height,
            data,
        })
    }

    /// Create an image from a slice of rows
    ///
    /// Every row must have the same length as the first one.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for an empty input and
    /// `Error::DimensionMismatch` for ragged rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use contourlet_core::Image;
    ///
    /// let image = Image::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(image.dimensions(), (3, 2));
    /// assert_eq!(image.get_pixel(2, 1).unwrap(), 6);
    /// ```
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let height = dimension_from_len(rows.len())?;
        let width = dimension_from_len(rows.first().map_or(0, Vec::len))?;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for row in rows {
            if row.len() != width as usize {
                return Err(Error::DimensionMismatch {
                    expected: (width, height),
                    actual: (dimension_from_len(row.len())?, height),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Image {
            width,
            height,
            data,
        })
    }

    /// Get the number of columns
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the number of rows
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the sample at column `x`, row `y`
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<T> {
        let idx = self.checked_index(x, y)?;
        Ok(self.data[idx])
    }

    /// Set the sample at column `x`, row `y`
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Get the sample at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> T {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the sample at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: T) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Get mutable access to the sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get a row of sample data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[T] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Get a mutable row of sample data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        let start = (y as usize) * (self.width as usize);
        &mut self.data[start..start + self.width as usize]
    }

    /// Copy out column `x`, top to bottom
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    pub fn column(&self, x: u32) -> Vec<T> {
        assert!(x < self.width, "column {x} out of range for width {}", self.width);
        self.data
            .iter()
            .skip(x as usize)
            .step_by(self.width as usize)
            .copied()
            .collect()
    }

    /// Set all samples to the specified value
    pub fn set_all(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Create an image with the same dimensions, filled with `T::default()`
    pub fn create_template(&self) -> Image<T> {
        Image {
            width: self.width,
            height: self.height,
            data: vec![T::default(); self.data.len()],
        }
    }

    /// Convert every sample with `f`, keeping the shape
    ///
    /// # Examples
    ///
    /// ```
    /// use contourlet_core::Image;
    ///
    /// let ints = Image::from_rows(&[vec![1u8, 2], vec![3, 4]]).unwrap();
    /// let floats = ints.map(f64::from);
    /// assert_eq!(floats.data(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Image<U>
    where
        F: FnMut(T) -> U,
    {
        Image {
            width: self.width,
            height: self.height,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    fn checked_index(&self, x: u32, y: u32) -> Result<usize> {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: idx,
                len: self.data.len(),
            });
        }
        Ok(idx)
    }
}

fn dimension_from_len(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| Error::InvalidParameter(format!("dimension {len} exceeds u32::MAX")))
}
