//! Dense multiplication kernels.
//!
//! Every output element is a single dot product accumulated in the format's
//! wide accumulator and narrowed once, so fixed-point rounding error is one
//! narrowing step per output rather than one per multiply-add.

use num_complex::Complex;

use crate::error::MatrixError;
use crate::traits::{Arithmetic, FastArithmetic, MatrixMut, MatrixRef};

#[cfg_attr(not(feature = "matrix-check"), allow(dead_code))]
#[inline]
fn product_shape<T, U, V>(
    a: &impl MatrixRef<T>,
    b: &impl MatrixRef<U>,
    dst: &impl MatrixRef<V>,
) -> bool {
    a.cols() == b.rows() && dst.rows() == a.rows() && dst.cols() == b.cols()
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

/// `dst = a * b`.
///
/// Fixed-point formats accumulate in [`Arithmetic::Acc`] (Q7 in `i32`, Q15
/// and Q31 in saturating `i64`) and narrow once with saturation.
///
/// ```
/// use dspmat::{matrix, Matrix, MatrixView};
///
/// let a = [1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let b = [7.0_f32, 8.0, 9.0, 10.0, 11.0, 12.0];
/// let mut c = [0.0_f32; 4];
/// let a = MatrixView::bind(2, 3, &a).unwrap();
/// let b = MatrixView::bind(3, 2, &b).unwrap();
/// matrix::mult(&a, &b, &mut Matrix::bind(2, 2, &mut c).unwrap()).unwrap();
/// assert_eq!(c, [58.0, 64.0, 139.0, 154.0]);
/// ```
pub fn mult<T: Arithmetic>(
    a: &impl MatrixRef<T>,
    b: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
) -> Result<(), MatrixError> {
    check_size!(product_shape(a, b, dst));

    let m = a.nrows();
    let n = a.ncols();
    let p = b.ncols();
    let lhs = a.as_slice();
    let rhs = b.as_slice();
    let out = dst.as_mut_slice();

    for i in 0..m {
        let row = &lhs[i * n..(i + 1) * n];
        for j in 0..p {
            let mut acc = T::acc_zero();
            for (k, &x) in row.iter().enumerate() {
                acc = T::mac(acc, x, rhs[k * p + j]);
            }
            out[i * p + j] = T::narrow(acc);
        }
    }
    Ok(())
}

/// `dst = a * b` with the narrow fast accumulator (Q15, Q31).
///
/// Intermediate sums wrap instead of saturating; only the final narrowing
/// saturates. Inputs must be scaled down by `log2(a.cols)` bits to stay in
/// range. Q31 products are truncated to 2.30 before accumulation, so results
/// may differ from [`mult`] in the last bits.
pub fn mult_fast<T: FastArithmetic>(
    a: &impl MatrixRef<T>,
    b: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
) -> Result<(), MatrixError> {
    check_size!(product_shape(a, b, dst));

    let m = a.nrows();
    let n = a.ncols();
    let p = b.ncols();
    let lhs = a.as_slice();
    let rhs = b.as_slice();
    let out = dst.as_mut_slice();

    for i in 0..m {
        let row = &lhs[i * n..(i + 1) * n];
        for j in 0..p {
            let mut acc = T::fast_acc_zero();
            for (k, &x) in row.iter().enumerate() {
                acc = T::fast_mac(acc, x, rhs[k * p + j]);
            }
            out[i * p + j] = T::fast_narrow(acc);
        }
    }
    Ok(())
}

/// `dst = a * b`, transposing `b` into `scratch` first.
///
/// Both operands are then walked row-wise, which keeps the inner loop on
/// contiguous memory. `scratch` must hold at least `b.rows * b.cols`
/// elements; its contents on return are `b^T`. Results are identical to
/// [`mult`].
pub fn mult_with_scratch<T: Arithmetic>(
    a: &impl MatrixRef<T>,
    b: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
    scratch: &mut [T],
) -> Result<(), MatrixError> {
    check_size!(product_shape(a, b, dst) && scratch.len() >= b.as_slice().len());

    let m = a.nrows();
    let n = a.ncols();
    let p = b.ncols();
    let rhs = b.as_slice();

    let bt = &mut scratch[..n * p];
    for k in 0..n {
        for j in 0..p {
            bt[j * n + k] = rhs[k * p + j];
        }
    }

    let lhs = a.as_slice();
    let out = dst.as_mut_slice();
    for i in 0..m {
        let row = &lhs[i * n..(i + 1) * n];
        for j in 0..p {
            let col = &bt[j * n..(j + 1) * n];
            let acc = row
                .iter()
                .zip(col)
                .fold(T::acc_zero(), |acc, (&x, &y)| T::mac(acc, x, y));
            out[i * p + j] = T::narrow(acc);
        }
    }
    Ok(())
}

// ── Matrix × vector ─────────────────────────────────────────────────

/// `y = a * x` for an `m × n` matrix and length-`n` vector.
///
/// No status: the caller guarantees `x.len() == a.cols` and
/// `y.len() == a.rows` (checked only in debug builds).
pub fn mat_vec_mult<T: Arithmetic>(a: &impl MatrixRef<T>, x: &[T], y: &mut [T]) {
    let n = a.ncols();
    debug_assert_eq!(x.len(), n, "vector length must equal matrix columns");
    debug_assert_eq!(y.len(), a.nrows(), "output length must equal matrix rows");

    for (i, out) in y.iter_mut().enumerate() {
        let row = &a.as_slice()[i * n..(i + 1) * n];
        let acc = row
            .iter()
            .zip(x)
            .fold(T::acc_zero(), |acc, (&aij, &xj)| T::mac(acc, aij, xj));
        *out = T::narrow(acc);
    }
}

// ── Complex multiplication ──────────────────────────────────────────

/// `dst = a * b` for complex matrices of interleaved (re, im) pairs.
///
/// Real and imaginary parts each accumulate in `T::Acc` and narrow once.
pub fn cmplx_mult<T: Arithmetic>(
    a: &impl MatrixRef<Complex<T>>,
    b: &impl MatrixRef<Complex<T>>,
    dst: &mut impl MatrixMut<Complex<T>>,
) -> Result<(), MatrixError> {
    check_size!(product_shape(a, b, dst));

    let m = a.nrows();
    let n = a.ncols();
    let p = b.ncols();
    let lhs = a.as_slice();
    let rhs = b.as_slice();
    let out = dst.as_mut_slice();

    for i in 0..m {
        for j in 0..p {
            let mut re = T::acc_zero();
            let mut im = T::acc_zero();
            for k in 0..n {
                let x = lhs[i * n + k];
                let y = rhs[k * p + j];
                re = T::mac(re, x.re, y.re);
                re = T::msub(re, x.im, y.im);
                im = T::mac(im, x.re, y.im);
                im = T::mac(im, x.im, y.re);
            }
            out[i * p + j] = Complex::new(T::narrow(re), T::narrow(im));
        }
    }
    Ok(())
}
