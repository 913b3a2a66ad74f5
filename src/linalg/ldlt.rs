use crate::error::MatrixError;
use crate::traits::{FloatFormat, MatrixMut, MatrixRef};

use super::{swap_cols, swap_rows};

/// LDL^T decomposition with the default threshold.
///
/// See [`ldlt_with_threshold`].
#[inline]
pub fn ldlt<T: FloatFormat>(
    src: &impl MatrixRef<T>,
    l: &mut impl MatrixMut<T>,
    d: &mut impl MatrixMut<T>,
    perm: &mut [u16],
) -> Result<(), MatrixError> {
    ldlt_with_threshold(src, l, d, perm, T::DEFAULT_THRESHOLD)
}

/// Pivoted LDL^T decomposition of a symmetric positive semi-definite matrix.
///
/// Produces unit lower-triangular `l`, diagonal `d` and a permutation with
/// `L * D * L^T = P^T * A * P`, where `perm[i]` is the row of `src` placed at
/// position `i`:
///
/// ```text
/// (L * D * L^T)[i][j] == src[perm[i]][perm[j]]
/// ```
///
/// Each step pivots on the largest remaining diagonal entry. A pivot below
/// `-threshold` means the matrix is not semi-definite. A pivot within
/// `threshold` of zero ends the factorization: if the whole remaining block is
/// within `threshold` of zero the matrix is rank-deficient and the trailing
/// entries of `d` are zero, otherwise no valid pivot exists. Both failures
/// return [`MatrixError::DecompositionFailure`].
///
/// ```
/// use dspmat::{linalg, Matrix, MatrixView};
///
/// // rank 1: v v^T with v = [1, 2, 3]
/// let a = [1.0_f64, 2.0, 3.0, 2.0, 4.0, 6.0, 3.0, 6.0, 9.0];
/// let (mut l, mut d, mut p) = ([0.0; 9], [0.0; 9], [0u16; 3]);
/// linalg::ldlt(
///     &MatrixView::bind(3, 3, &a).unwrap(),
///     &mut Matrix::bind(3, 3, &mut l).unwrap(),
///     &mut Matrix::bind(3, 3, &mut d).unwrap(),
///     &mut p,
/// )
/// .unwrap();
/// assert_eq!(p[0], 2);
/// assert_eq!(d[0], 9.0);
/// assert_eq!((d[4], d[8]), (0.0, 0.0));
/// ```
pub fn ldlt_with_threshold<T: FloatFormat>(
    src: &impl MatrixRef<T>,
    l: &mut impl MatrixMut<T>,
    d: &mut impl MatrixMut<T>,
    perm: &mut [u16],
    threshold: T,
) -> Result<(), MatrixError> {
    check_size!(
        src.rows() == src.cols()
            && l.rows() == src.rows()
            && l.cols() == src.cols()
            && d.rows() == src.rows()
            && d.cols() == src.cols()
            && perm.len() == src.nrows()
    );

    let n = src.nrows();
    let a = l.as_mut_slice();
    a.copy_from_slice(src.as_slice());

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i as u16;
    }

    let mut rank = n;
    for k in 0..n {
        let mut j = k;
        let mut pivot = a[k * n + k];
        for r in (k + 1)..n {
            if a[r * n + r] > pivot {
                pivot = a[r * n + r];
                j = r;
            }
        }

        if j != k {
            log::trace!("ldlt: pivot swap {} <-> {}", k, j);
            swap_rows(a, n, k, j, 0);
            swap_cols(a, n, k, j);
            perm.swap(k, j);
        }

        if pivot < -threshold || pivot.is_nan() {
            log::debug!("ldlt: negative pivot {:?} at step {}", pivot, k);
            return Err(MatrixError::DecompositionFailure);
        }
        if pivot <= threshold {
            let trailing_zero = (k..n).all(|r| (k..n).all(|c| a[r * n + c].abs() <= threshold));
            if !trailing_zero {
                log::debug!("ldlt: no valid pivot at step {}", k);
                return Err(MatrixError::DecompositionFailure);
            }
            log::trace!("ldlt: rank {} of {}", k, n);
            rank = k;
            break;
        }

        // Schur complement update of the trailing block.
        for w in (k + 1)..n {
            let f = a[w * n + k] / pivot;
            for x in (k + 1)..n {
                a[w * n + x] = a[w * n + x] - f * a[x * n + k];
            }
        }
        for w in (k + 1)..n {
            a[w * n + k] = a[w * n + k] / pivot;
        }
    }

    let dd = d.as_mut_slice();
    for x in dd.iter_mut() {
        *x = T::zero();
    }
    for i in 0..rank {
        dd[i * n + i] = a[i * n + i];
    }

    for i in 0..n {
        for c in (i + 1)..n {
            a[i * n + c] = T::zero();
        }
        // Columns at or past the rank are unit columns.
        if i >= rank {
            for r in (i + 1)..n {
                a[r * n + i] = T::zero();
            }
        }
        a[i * n + i] = T::one();
    }

    Ok(())
}
