//! Shear sampling lattices
//!
//! Column resampling realizes one of two unimodular integer matrices acting
//! on (row, column) sample coordinates:
//!
//! ```text
//! R1 = [1  s]      R2 = [1 -s]
//!      [0  1]           [0  1]
//! ```
//!
//! Output sample (i, j) is read from source coordinates `R * (i, j)`, with
//! the row wrapped modulo the image height. [`Direction::Down`] selects R1
//! and [`Direction::Up`] selects R2. Since `R1 * R2 = I` for the same `s`,
//! the two directions undo each other.

use crate::{TransformError, TransformResult};

/// Direction of the per-column circular shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Column `j` starts reading at row `s * j` (flag 0)
    #[default]
    Down = 0,
    /// Column `j` starts reading at row `-s * j` (flag 1)
    Up = 1,
}

impl Direction {
    /// The opposite direction
    pub fn reverse(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = TransformError;

    fn try_from(flag: i32) -> TransformResult<Self> {
        match flag {
            0 => Ok(Direction::Down),
            1 => Ok(Direction::Up),
            _ => Err(TransformError::InvalidDirection(flag)),
        }
    }
}

impl From<Direction> for i32 {
    fn from(direction: Direction) -> i32 {
        direction as i32
    }
}

/// Integer shear matrix `[[1, ±shift], [0, 1]]`
///
/// Entries are `i128` so that negating any `i64` shift stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShearMatrix {
    direction: Direction,
    shift: i64,
}

impl ShearMatrix {
    /// Create the shear matrix for a direction and shift amount
    pub fn new(direction: Direction, shift: i64) -> Self {
        Self { direction, shift }
    }

    /// Direction of the shear
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Shift amount as supplied
    pub fn shift(&self) -> i64 {
        self.shift
    }

    /// Upper-right matrix entry: `shift` for down, `-shift` for up
    pub fn off_diagonal(&self) -> i128 {
        match self.direction {
            Direction::Down => self.shift as i128,
            Direction::Up => -(self.shift as i128),
        }
    }

    /// The full 2x2 matrix, row-major
    pub fn matrix(&self) -> [[i128; 2]; 2] {
        [[1, self.off_diagonal()], [0, 1]]
    }

    /// Determinant, always 1 for a shear
    pub fn determinant(&self) -> i128 {
        let [[a, b], [c, d]] = self.matrix();
        a * d - b * c
    }

    /// The matrix that undoes this one
    ///
    /// # Examples
    ///
    /// ```
    /// use contourlet_transform::{Direction, ShearMatrix};
    ///
    /// let r1 = ShearMatrix::new(Direction::Down, 3);
    /// assert_eq!(r1.inverse(), ShearMatrix::new(Direction::Up, 3));
    /// ```
    pub fn inverse(&self) -> Self {
        Self::new(self.direction.reverse(), self.shift)
    }

    /// Map (row, column) coordinates through the matrix
    pub fn map_point(&self, row: i64, col: i64) -> (i128, i128) {
        (row as i128 + self.off_diagonal() * col as i128, col as i128)
    }

    /// Source row read for output row 0 of column `col`, wrapped into
    /// `0..height`
    ///
    /// The shift is reduced modulo `height` before multiplying, so no
    /// intermediate value exceeds `height^2`.
    ///
    /// # Panics
    ///
    /// Panics if `height == 0`.
    pub fn row_offset(&self, col: u32, height: u32) -> u32 {
        let m = u64::from(height);
        let s = self.shift.rem_euclid(height as i64) as u64;
        let k = s * (u64::from(col) % m) % m;
        let k = match self.direction {
            Direction::Down => k,
            Direction::Up => (m - k) % m,
        };
        k as u32
    }
}
