mod mult;
mod ops;

pub use mult::{cmplx_mult, mat_vec_mult, mult, mult_fast, mult_with_scratch};
pub use ops::{add, scale, sub, transpose, transpose_complex};

use core::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::traits::{MatrixMut, MatrixRef};

#[inline]
fn check_len(rows: u16, cols: u16, len: usize) -> Result<(), MatrixError> {
    if len != rows as usize * cols as usize {
        log::debug!("bind: {}x{} matrix over a buffer of {} elements", rows, cols, len);
        return Err(MatrixError::SizeMismatch);
    }
    Ok(())
}

/// Matrix descriptor over a caller-owned mutable buffer.
///
/// Row-major: element `(i, j)` is `data[i * cols + j]`. The handle owns no
/// memory; dropping it only ends the borrow.
///
/// # Examples
///
/// ```
/// use dspmat::{Matrix, MatrixRef};
///
/// let mut buf = [1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let m = Matrix::bind(2, 3, &mut buf).unwrap();
/// assert_eq!(m[(1, 0)], 4.0);
/// assert_eq!(m.nrows(), 2);
/// assert_eq!(m.ncols(), 3);
///
/// let mut short = [0.0_f32; 5];
/// assert!(Matrix::bind(2, 3, &mut short).is_err());
/// ```
#[derive(Debug, PartialEq)]
pub struct Matrix<'a, T> {
    rows: u16,
    cols: u16,
    data: &'a mut [T],
}

impl<'a, T> Matrix<'a, T> {
    /// Bind dimensions to a buffer of exactly `rows * cols` elements.
    ///
    /// Returns [`MatrixError::SizeMismatch`] on a length mismatch. This check
    /// is independent of the `matrix-check` feature.
    #[inline]
    pub fn bind(rows: u16, cols: u16, data: &'a mut [T]) -> Result<Self, MatrixError> {
        check_len(rows, cols, data.len())?;
        Ok(Self { rows, cols, data })
    }

    /// Shared view of the same buffer.
    #[inline]
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView {
            rows: self.rows,
            cols: self.cols,
            data: &*self.data,
        }
    }

    /// Shorter-lived handle over the same buffer.
    #[inline]
    pub fn reborrow(&mut self) -> Matrix<'_, T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: &mut *self.data,
        }
    }

    /// Release the handle, returning the buffer.
    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

/// Matrix descriptor over a caller-owned read-only buffer.
///
/// Same layout as [`Matrix`]; used for operation inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixView<'a, T> {
    rows: u16,
    cols: u16,
    data: &'a [T],
}

impl<'a, T> MatrixView<'a, T> {
    #[inline]
    pub fn bind(rows: u16, cols: u16, data: &'a [T]) -> Result<Self, MatrixError> {
        check_len(rows, cols, data.len())?;
        Ok(Self { rows, cols, data })
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl<T> MatrixRef<T> for Matrix<'_, T> {
    #[inline]
    fn rows(&self) -> u16 {
        self.rows
    }

    #[inline]
    fn cols(&self) -> u16 {
        self.cols
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.data
    }
}

impl<T> MatrixMut<T> for Matrix<'_, T> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.data
    }
}

impl<T> MatrixRef<T> for MatrixView<'_, T> {
    #[inline]
    fn rows(&self) -> u16 {
        self.rows
    }

    #[inline]
    fn cols(&self) -> u16 {
        self.cols
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.data
    }
}

// Index by (row, col) tuple
impl<T> Index<(usize, usize)> for Matrix<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols as usize + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<'_, T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.cols as usize + col]
    }
}

impl<T> Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols as usize + col]
    }
}
