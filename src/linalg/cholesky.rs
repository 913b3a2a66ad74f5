use crate::error::MatrixError;
use crate::traits::{FloatFormat, MatrixMut, MatrixRef};

/// Cholesky decomposition `A = L * L^T` with the default threshold.
///
/// See [`cholesky_with_threshold`].
///
/// ```
/// use dspmat::{linalg, Matrix, MatrixView};
///
/// let a = [4.0_f64, 12.0, -16.0, 12.0, 37.0, -43.0, -16.0, -43.0, 98.0];
/// let mut l = [0.0_f64; 9];
/// linalg::cholesky(
///     &MatrixView::bind(3, 3, &a).unwrap(),
///     &mut Matrix::bind(3, 3, &mut l).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(l, [2.0, 0.0, 0.0, 6.0, 1.0, 0.0, -8.0, 5.0, 3.0]);
/// ```
#[inline]
pub fn cholesky<T: FloatFormat>(
    src: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
) -> Result<(), MatrixError> {
    cholesky_with_threshold(src, dst, T::DEFAULT_THRESHOLD)
}

/// Cholesky decomposition of a symmetric positive-definite matrix.
///
/// Only the lower triangle of `src` is read. On success `dst` holds the
/// lower-triangular factor `L` with its strict upper triangle zeroed.
///
/// Column `i` first reduces the diagonal to its residual
/// `a[i][i] - sum_k l[i][k]^2`; a residual at or below `threshold` (or NaN)
/// means the matrix is not positive definite and the call returns
/// [`MatrixError::DecompositionFailure`] instead of taking a square root.
/// For semi-definite or ill-conditioned input use [`ldlt`](super::ldlt).
pub fn cholesky_with_threshold<T: FloatFormat>(
    src: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
    threshold: T,
) -> Result<(), MatrixError> {
    check_size!(src.rows() == src.cols() && dst.rows() == src.rows() && dst.cols() == src.cols());

    let n = src.nrows();
    let a = src.as_slice();
    let g = dst.as_mut_slice();

    for i in 0..n {
        for j in i..n {
            let mut v = a[j * n + i];
            for k in 0..i {
                v = v - g[i * n + k] * g[j * n + k];
            }
            g[j * n + i] = v;
        }

        let diag = g[i * n + i];
        // Written as a negated comparison so NaN also fails.
        if !(diag > threshold) {
            log::debug!("cholesky: residual {:?} at column {} is not positive", diag, i);
            return Err(MatrixError::DecompositionFailure);
        }

        let lii = diag.sqrt();
        g[i * n + i] = lii;
        for j in (i + 1)..n {
            g[j * n + i] = g[j * n + i] / lii;
        }
        for j in (i + 1)..n {
            g[i * n + j] = T::zero();
        }
    }

    Ok(())
}
