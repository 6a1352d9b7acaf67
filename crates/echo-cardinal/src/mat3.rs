// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::hash::Hash;
use core::ops::{Div, Index, IndexMut, Mul, Neg};

use thiserror::Error;
use tracing::debug;

use crate::IntVec3;

/// Errors emitted by matrix construction and inversion.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix has determinant zero and no integer inverse.
    #[error("matrix is singular (determinant is zero)")]
    Singular,
    /// A value does not fit the matrix's cell type.
    #[error("value {value} at ({row}, {col}) does not fit the matrix cell type")]
    OutOfRange {
        /// Row of the rejected value.
        row: usize,
        /// Column of the rejected value.
        col: usize,
        /// The rejected value.
        value: i64,
    },
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i8 {}
    impl Sealed for i32 {}
}

/// Storage type of a [`Mat3`] cell.
///
/// Implemented for `i32` (full width) and `i8` (narrow). Cofactors and
/// determinants are computed in wider integers; writing back narrows and is
/// range-checked.
pub trait Cell:
    Copy + fmt::Debug + fmt::Display + Default + Eq + Hash + Into<i32> + sealed::Sealed
{
    /// Narrows `value` into this cell type, or `None` if it does not fit.
    fn narrow(value: i64) -> Option<Self>;

    /// Two's-complement negation that never panics.
    fn negate(self) -> Self;
}

impl Cell for i8 {
    fn narrow(value: i64) -> Option<Self> {
        Self::try_from(value).ok()
    }

    fn negate(self) -> Self {
        self.wrapping_neg()
    }
}

impl Cell for i32 {
    fn narrow(value: i64) -> Option<Self> {
        Self::try_from(value).ok()
    }

    fn negate(self) -> Self {
        self.wrapping_neg()
    }
}

/// Row-major 3×3 integer matrix.
///
/// - Cells are addressed as `(row, column)` with both indices in `0..3`;
///   anything else is a programmer error and panics through [`Index`].
/// - Columns are read and written as [`IntVec3`] values; an
///   [`crate::Orientation`] stores its right/up/forward basis as columns 0/1/2.
/// - Cofactors are exact in `i64` and the determinant in `i128`, so no
///   `i32` input can overflow them. Inversion divides the adjugate by the
///   determinant with truncating integer division.
/// - Products (`multiply`, `multiply_point`, scalar `*`) wrap on `i32`
///   overflow.
///
/// # Examples
/// ```
/// use echo_cardinal::{IntMat3, IntVec3};
/// let m = IntMat3::from_rows(
///     IntVec3::new(1, 0, -3),
///     IntVec3::new(2, -2, 1),
///     IntVec3::new(0, -1, 3),
/// );
/// assert_eq!(m.determinant(), 1);
/// let det = i32::try_from(m.determinant()).unwrap();
/// assert_eq!(m.adjugate().unwrap() / det, m.inverse().unwrap());
/// assert_eq!(m.inverse().unwrap().row(0), IntVec3::new(-5, 3, -6));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Mat3<T> {
    rows: [[T; 3]; 3],
}

/// Full-width matrix; no range restriction on cells.
pub type IntMat3 = Mat3<i32>;

/// Narrow matrix backing [`crate::Orientation`]; cells are `i8`.
pub type ByteMat3 = Mat3<i8>;

impl Mat3<i32> {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    };

    /// The all-zero matrix.
    pub const ZERO: Self = Self { rows: [[0; 3]; 3] };

    /// Builds a matrix from three columns.
    pub const fn from_columns(c0: IntVec3, c1: IntVec3, c2: IntVec3) -> Self {
        Self {
            rows: [
                [c0.x(), c1.x(), c2.x()],
                [c0.y(), c1.y(), c2.y()],
                [c0.z(), c1.z(), c2.z()],
            ],
        }
    }

    /// Builds a matrix from three rows.
    pub const fn from_rows(r0: IntVec3, r1: IntVec3, r2: IntVec3) -> Self {
        Self {
            rows: [r0.to_array(), r1.to_array(), r2.to_array()],
        }
    }

    /// Matrix product `self * rhs`, wrapping on overflow.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [[0; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = self.row(row).wrapping_dot(rhs.column(col));
            }
        }
        Self { rows: out }
    }

    fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self {
            rows: self.rows.map(|row| row.map(&f)),
        }
    }
}

impl Mat3<i8> {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    };

    /// The all-zero matrix.
    pub const ZERO: Self = Self { rows: [[0; 3]; 3] };

    /// Builds a matrix whose columns are the signs of `c0`, `c1` and `c2`.
    ///
    /// Every cell is in `{-1, 0, 1}`, so the narrowing cannot fail.
    pub const fn from_sign_columns(c0: IntVec3, c1: IntVec3, c2: IntVec3) -> Self {
        Self {
            rows: [
                [sign_cell(c0.x()), sign_cell(c1.x()), sign_cell(c2.x())],
                [sign_cell(c0.y()), sign_cell(c1.y()), sign_cell(c2.y())],
                [sign_cell(c0.z()), sign_cell(c1.z()), sign_cell(c2.z())],
            ],
        }
    }
}

const fn sign_cell(value: i32) -> i8 {
    if value < 0 {
        -1
    } else if value > 0 {
        1
    } else {
        0
    }
}

impl<T: Cell> Mat3<T> {
    /// Builds a matrix from three columns, rejecting any component that does
    /// not fit `T`.
    pub fn try_from_columns(c0: IntVec3, c1: IntVec3, c2: IntVec3) -> Result<Self, MatrixError> {
        let mut m = Self::default();
        for (col, v) in [c0, c1, c2].into_iter().enumerate() {
            m.try_set_column(col, v)?;
        }
        Ok(m)
    }

    /// Builds a matrix from three rows, rejecting any component that does not
    /// fit `T`.
    pub fn try_from_rows(r0: IntVec3, r1: IntVec3, r2: IntVec3) -> Result<Self, MatrixError> {
        let mut m = Self::default();
        for (row, v) in [r0, r1, r2].into_iter().enumerate() {
            m.try_set_row(row, v)?;
        }
        Ok(m)
    }

    /// Returns the cell at `(row, col)`, or `None` when either index is
    /// outside `0..3`.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrites the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is outside `0..3`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }

    fn at(&self, row: usize, col: usize) -> i32 {
        self.rows[row][col].into()
    }

    fn wide(&self, row: usize, col: usize) -> i64 {
        i64::from(self.at(row, col))
    }

    fn store(&mut self, row: usize, col: usize, value: i64) -> Result<(), MatrixError> {
        let Some(cell) = T::narrow(value) else {
            debug!(row, col, value, "rejected out-of-range matrix cell");
            return Err(MatrixError::OutOfRange { row, col, value });
        };
        self.rows[row][col] = cell;
        Ok(())
    }

    /// Returns column `index` as a vector.
    ///
    /// # Panics
    /// Panics if `index > 2`.
    pub fn column(&self, index: usize) -> IntVec3 {
        IntVec3::new(self.at(0, index), self.at(1, index), self.at(2, index))
    }

    /// Returns row `index` as a vector.
    ///
    /// # Panics
    /// Panics if `index > 2`.
    pub fn row(&self, index: usize) -> IntVec3 {
        IntVec3::new(self.at(index, 0), self.at(index, 1), self.at(index, 2))
    }

    /// Overwrites column `index`. On error the matrix is left unchanged.
    ///
    /// # Panics
    /// Panics if `index > 2`.
    pub fn try_set_column(&mut self, index: usize, column: IntVec3) -> Result<(), MatrixError> {
        let mut next = *self;
        for row in 0..3 {
            next.store(row, index, i64::from(column[row]))?;
        }
        *self = next;
        Ok(())
    }

    /// Overwrites row `index`. On error the matrix is left unchanged.
    ///
    /// # Panics
    /// Panics if `index > 2`.
    pub fn try_set_row(&mut self, index: usize, row: IntVec3) -> Result<(), MatrixError> {
        let mut next = *self;
        for col in 0..3 {
            next.store(index, col, i64::from(row[col]))?;
        }
        *self = next;
        Ok(())
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut rows = self.rows;
        for (row, cells) in rows.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.rows[col][row];
            }
        }
        Self { rows }
    }

    /// Signed 2×2 minor at `(i, j)`, exact for every cell value.
    ///
    /// Neighbouring rows and columns are taken with wrap-around indexing, so
    /// `M[i+1, j+1] * M[i-1, j-1] - M[i-1, j+1] * M[i+1, j-1]` (indices mod 3)
    /// already carries the checkerboard sign for every position.
    ///
    /// # Panics
    /// Panics if `i > 2` or `j > 2`.
    pub fn cofactor(&self, i: usize, j: usize) -> i64 {
        assert!(i < 3 && j < 3, "cofactor index ({i}, {j}) out of range");
        // i - 1 ≡ i + 2 (mod 3)
        let (next_i, prev_i) = ((i + 1) % 3, (i + 2) % 3);
        let (next_j, prev_j) = ((j + 1) % 3, (j + 2) % 3);
        // Each product is at most 2^62 in magnitude; the difference fits i64.
        self.wide(next_i, next_j) * self.wide(prev_i, prev_j)
            - self.wide(prev_i, next_j) * self.wide(next_i, prev_j)
    }

    /// Determinant by cofactor expansion along row 0, exact in `i128`.
    pub fn determinant(&self) -> i128 {
        (0..3)
            .map(|j| i128::from(self.wide(0, j)) * i128::from(self.cofactor(0, j)))
            .sum()
    }

    /// Transpose of the cofactor matrix, at full width.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] when a cofactor does not fit `i32`.
    pub fn adjugate(&self) -> Result<IntMat3, MatrixError> {
        let mut out = IntMat3::ZERO;
        for row in 0..3 {
            for col in 0..3 {
                out.store(row, col, self.cofactor(col, row))?;
            }
        }
        Ok(out)
    }

    /// Exact integer inverse: `adjugate / determinant`.
    ///
    /// Division truncates; callers must only invert matrices whose
    /// determinant divides every adjugate cell (always true for `±1`
    /// determinants, which covers every orthonormal sign basis).
    ///
    /// # Errors
    /// [`MatrixError::Singular`] when the determinant is zero;
    /// [`MatrixError::OutOfRange`] when a quotient does not fit `T`.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant();
        if det == 0 {
            debug!(matrix = %self, "refusing to invert singular matrix");
            return Err(MatrixError::Singular);
        }
        let mut out = Self::default();
        for row in 0..3 {
            for col in 0..3 {
                let cofactor = self.cofactor(col, row);
                // A determinant wider than i64 exceeds every cofactor, so the
                // truncated quotient is zero. Cofactors never reach i64::MIN,
                // so dividing by -1 cannot overflow.
                let quotient = i64::try_from(det).map_or(0, |det| cofactor / det);
                out.store(row, col, quotient)?;
            }
        }
        Ok(out)
    }

    /// Transforms `vector` by this matrix (`M * v`), wrapping on `i32`
    /// overflow.
    pub fn multiply_point(&self, vector: IntVec3) -> IntVec3 {
        IntVec3::new(
            self.row(0).wrapping_dot(vector),
            self.row(1).wrapping_dot(vector),
            self.row(2).wrapping_dot(vector),
        )
    }

    /// Copies the matrix into full-width storage.
    pub fn widen(&self) -> IntMat3 {
        IntMat3::from_rows(self.row(0), self.row(1), self.row(2))
    }
}

impl<T> Index<(usize, usize)> for Mat3<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Mat3<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}

impl<T: Cell> Neg for Mat3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let mut rows = self.rows;
        for cell in rows.iter_mut().flatten() {
            *cell = cell.negate();
        }
        Self { rows }
    }
}

impl<T: Cell> Mul<IntVec3> for Mat3<T> {
    type Output = IntVec3;

    fn mul(self, rhs: IntVec3) -> Self::Output {
        self.multiply_point(rhs)
    }
}

impl Mul for IntMat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

/// Scales every cell, wrapping on overflow.
impl Mul<i32> for IntMat3 {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        self.map(|cell| cell.wrapping_mul(rhs))
    }
}

/// Truncating cell-wise division.
///
/// # Panics
/// Panics when `rhs` is zero, like integer division.
impl Div<i32> for IntMat3 {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        self.map(|cell| cell.wrapping_div(rhs))
    }
}

impl<T: Cell> fmt::Display for Mat3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.row(0), self.row(1), self.row(2))
    }
}
