use crate::error::MatrixError;
use crate::traits::{FloatFormat, MatrixMut};

use super::set_identity;

/// Householder vector for `src`, written to `out`.
///
/// Returns the scaling factor `beta` such that `H = I - beta * v * v^T`
/// maps `src` onto a multiple of `e0`, with `v = out` and `out[0] = 1`.
/// If the squared norm of `src[1..]` is at or below `threshold` the vector
/// is already aligned with `e0`: `out` is zeroed and `0` returned.
///
/// ```
/// use dspmat::linalg;
///
/// let x = [3.0_f64, 4.0];
/// let mut v = [0.0; 2];
/// let beta = linalg::householder(&x, 1e-12, &mut v);
/// assert_eq!(v, [1.0, 0.5]);
/// assert_eq!(beta, 1.6);
/// ```
pub fn householder<T: FloatFormat>(src: &[T], threshold: T, out: &mut [T]) -> T {
    debug_assert_eq!(src.len(), out.len());
    out.copy_from_slice(src);
    householder_in_place(out, threshold)
}

/// [`householder`] overwriting its input with the reflection vector.
pub fn householder_in_place<T: FloatFormat>(v: &mut [T], threshold: T) -> T {
    let Some((&alpha, tail)) = v.split_first() else {
        return T::zero();
    };

    let mut tail_sq = T::zero();
    for &x in tail {
        tail_sq = tail_sq + x * x;
    }

    if tail_sq <= threshold {
        v.fill(T::zero());
        return T::zero();
    }

    let mut beta = (alpha * alpha + tail_sq).sqrt();
    if alpha > T::zero() {
        beta = -beta;
    }

    let denom = alpha - beta;
    for x in v[1..].iter_mut() {
        *x = *x / denom;
    }
    v[0] = T::one();

    (beta - alpha) / beta
}

/// QR decomposition of an `m × n` matrix (`m >= n`) by Householder reflections.
///
/// `src` is consumed: on return its strict lower part holds the reflection
/// vectors (implicit unit leading entry) and its upper part holds `R`.
/// Outputs:
/// - `r`: `m × n`, upper trapezoidal (zeros below the diagonal)
/// - `q`: `m × m`, orthogonal, `Q * R = A`
/// - `tau`: the `n` reflection factors
///
/// `tmp_a` (at least `m` long) and `tmp_b` (at least `n` long) are scratch.
///
/// Step `k` fails with [`MatrixError::Singular`] when the 2-norm of the
/// working sub-column `A[k.., k]` is at or below `threshold`.
#[allow(clippy::too_many_arguments)]
pub fn qr<T: FloatFormat>(
    src: &mut impl MatrixMut<T>,
    threshold: T,
    r: &mut impl MatrixMut<T>,
    q: &mut impl MatrixMut<T>,
    tau: &mut [T],
    tmp_a: &mut [T],
    tmp_b: &mut [T],
) -> Result<(), MatrixError> {
    check_size!(
        src.rows() >= src.cols()
            && r.rows() == src.rows()
            && r.cols() == src.cols()
            && q.rows() == src.rows()
            && q.cols() == src.rows()
            && tau.len() >= src.ncols()
            && tmp_a.len() >= src.nrows()
            && tmp_b.len() >= src.ncols()
    );

    let m = src.nrows();
    let n = src.ncols();
    let a = src.as_mut_slice();

    for col in 0..n {
        let len = m - col;
        let v = &mut tmp_a[..len];

        let mut norm_sq = T::zero();
        for (i, x) in v.iter_mut().enumerate() {
            *x = a[(col + i) * n + col];
            norm_sq = norm_sq + *x * *x;
        }
        let norm = norm_sq.sqrt();
        if !(norm > threshold) {
            log::debug!("qr: column {} has norm {:?}", col, norm);
            return Err(MatrixError::Singular);
        }

        let beta = householder_in_place(v, threshold);
        tau[col] = beta;

        // w = v^T * A[col.., col..]
        let w = &mut tmp_b[..n - col];
        for (j, wj) in w.iter_mut().enumerate() {
            let mut dot = T::zero();
            for (i, &vi) in v.iter().enumerate() {
                dot = dot + vi * a[(col + i) * n + col + j];
            }
            *wj = dot * beta;
        }

        // A -= v * w
        for (i, &vi) in v.iter().enumerate() {
            let row = &mut a[(col + i) * n + col..(col + i + 1) * n];
            for (x, &wj) in row.iter_mut().zip(w.iter()) {
                *x = *x - vi * wj;
            }
        }

        for i in 1..len {
            a[(col + i) * n + col] = v[i];
        }
    }

    let rr = r.as_mut_slice();
    for i in 0..m {
        for j in 0..n {
            rr[i * n + j] = if j >= i { a[i * n + j] } else { T::zero() };
        }
    }

    // Q = H_0 * H_1 * ... * H_{n-1}, accumulated right to left so that each
    // reflection only touches the trailing block.
    set_identity(q);
    let qq = q.as_mut_slice();
    for col in (0..n).rev() {
        let beta = tau[col];
        if beta == T::zero() {
            continue;
        }
        for j in col..m {
            let mut dot = qq[col * m + j];
            for i in (col + 1)..m {
                dot = dot + a[i * n + col] * qq[i * m + j];
            }
            let s = dot * beta;
            qq[col * m + j] = qq[col * m + j] - s;
            for i in (col + 1)..m {
                qq[i * m + j] = qq[i * m + j] - s * a[i * n + col];
            }
        }
    }

    Ok(())
}
