use num_traits::NumCast;

use crate::error::MatrixError;
use crate::traits::{FloatFormat, MatrixMut};

use super::{mas_row, set_identity, swap_rows};

/// Matrix inverse with the default threshold.
///
/// See [`inverse_with_threshold`].
#[inline]
pub fn inverse<T: FloatFormat>(
    src: &mut impl MatrixMut<T>,
    dst: &mut impl MatrixMut<T>,
) -> Result<(), MatrixError> {
    inverse_with_threshold(src, dst, T::DEFAULT_THRESHOLD)
}

/// Inverse of a square matrix by Gauss-Jordan elimination with partial
/// pivoting.
///
/// `src` is used as workspace and is left reduced to the identity (or
/// partially reduced on failure). Each column pivots on the entry of
/// largest magnitude at or below the diagonal.
///
/// The singularity test is relative to the size of the input: a pivot at or
/// below `max(threshold, n * epsilon) * ||A||_inf` returns
/// [`MatrixError::Singular`]. Rounding residue left by dependent rows is
/// then rejected no matter how the matrix is scaled.
///
/// ```
/// use dspmat::{linalg, Matrix};
///
/// let mut a = [4.0_f64, 7.0, 2.0, 6.0];
/// let mut inv = [0.0; 4];
/// linalg::inverse(
///     &mut Matrix::bind(2, 2, &mut a).unwrap(),
///     &mut Matrix::bind(2, 2, &mut inv).unwrap(),
/// )
/// .unwrap();
/// let expected = [0.6, -0.7, -0.2, 0.4];
/// for (x, e) in inv.iter().zip(expected) {
///     assert!((x - e).abs() < 1e-14);
/// }
/// ```
pub fn inverse_with_threshold<T: FloatFormat>(
    src: &mut impl MatrixMut<T>,
    dst: &mut impl MatrixMut<T>,
    threshold: T,
) -> Result<(), MatrixError> {
    check_size!(src.rows() == src.cols() && dst.rows() == src.rows() && dst.cols() == src.cols());

    let n = src.nrows();
    let a = src.as_mut_slice();

    let mut norm = T::zero();
    for row in a.chunks_exact(n.max(1)) {
        let sum = row.iter().fold(T::zero(), |acc, x| acc + x.abs());
        // NaN propagates so the pivot test below rejects it.
        if !(sum <= norm) {
            norm = sum;
        }
    }
    let rounding = <T as NumCast>::from(n).map_or(T::infinity(), |nf| nf * T::epsilon());
    let tol = threshold.max(rounding) * norm;

    set_identity(dst);
    let inv = dst.as_mut_slice();

    for c in 0..n {
        let mut p = c;
        let mut best = a[c * n + c].abs();
        for r in (c + 1)..n {
            let v = a[r * n + c].abs();
            if v > best {
                best = v;
                p = r;
            }
        }

        if !(best > tol) {
            log::debug!("inverse: pivot {:?} in column {} (tolerance {:?})", best, c, tol);
            return Err(MatrixError::Singular);
        }

        swap_rows(a, n, c, p, c);
        swap_rows(inv, n, c, p, 0);

        let pivot = a[c * n + c];
        for x in a[c * n + c..(c + 1) * n].iter_mut() {
            *x = *x / pivot;
        }
        for x in inv[c * n..(c + 1) * n].iter_mut() {
            *x = *x / pivot;
        }

        for r in 0..n {
            if r == c {
                continue;
            }
            let f = a[r * n + c];
            if f != T::zero() {
                mas_row(a, n, r, f, c, c);
                mas_row(inv, n, r, f, c, 0);
            }
        }
    }

    Ok(())
}
