use num_complex::Complex;

use crate::error::MatrixError;
use crate::traits::{Arithmetic, Element, MatrixMut, MatrixRef, Scalable};

#[cfg_attr(not(feature = "matrix-check"), allow(dead_code))]
#[inline]
fn same_shape<T, U>(a: &impl MatrixRef<T>, b: &impl MatrixRef<U>) -> bool {
    a.rows() == b.rows() && a.cols() == b.cols()
}

// ── Element-wise addition / subtraction ─────────────────────────────

/// `dst = a + b`, saturating for fixed-point formats.
///
/// ```
/// use dspmat::{matrix, Matrix, MatrixView, Q15};
///
/// let a = [Q15::MAX, Q15(1)];
/// let b = [Q15(1), Q15(1)];
/// let mut c = [Q15(0); 2];
/// let a = MatrixView::bind(1, 2, &a).unwrap();
/// let b = MatrixView::bind(1, 2, &b).unwrap();
/// let mut dst = Matrix::bind(1, 2, &mut c).unwrap();
/// matrix::add(&a, &b, &mut dst).unwrap();
/// assert_eq!(c, [Q15::MAX, Q15(2)]);
/// ```
pub fn add<T: Arithmetic>(
    a: &impl MatrixRef<T>,
    b: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
) -> Result<(), MatrixError> {
    check_size!(same_shape(a, b) && same_shape(a, dst));

    let out = dst.as_mut_slice();
    for ((o, &x), &y) in out.iter_mut().zip(a.as_slice()).zip(b.as_slice()) {
        *o = x.sat_add(y);
    }
    Ok(())
}

/// `dst = a - b`, saturating for fixed-point formats.
pub fn sub<T: Arithmetic>(
    a: &impl MatrixRef<T>,
    b: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
) -> Result<(), MatrixError> {
    check_size!(same_shape(a, b) && same_shape(a, dst));

    let out = dst.as_mut_slice();
    for ((o, &x), &y) in out.iter_mut().zip(a.as_slice()).zip(b.as_slice()) {
        *o = x.sat_sub(y);
    }
    Ok(())
}

// ── Scaling ─────────────────────────────────────────────────────────

/// `dst = src * factor`.
///
/// Floats take a plain multiplier. Fixed-point formats take a
/// [`FixedScale`](crate::format::FixedScale): each product is shifted with
/// round-to-nearest and saturated.
pub fn scale<T: Scalable>(
    src: &impl MatrixRef<T>,
    factor: T::Factor,
    dst: &mut impl MatrixMut<T>,
) -> Result<(), MatrixError> {
    check_size!(same_shape(src, dst));

    for (o, &x) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *o = x.scale(factor);
    }
    Ok(())
}

// ── Transposition ───────────────────────────────────────────────────

/// `dst = src^T`. `dst` must be `cols × rows`.
pub fn transpose<T: Element>(
    src: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
) -> Result<(), MatrixError> {
    check_size!(dst.rows() == src.cols() && dst.cols() == src.rows());

    let m = src.nrows();
    let n = src.ncols();
    let input = src.as_slice();
    let out = dst.as_mut_slice();
    for i in 0..m {
        for j in 0..n {
            out[j * m + i] = input[i * n + j];
        }
    }
    Ok(())
}

/// Transpose of a complex matrix stored as interleaved (re, im) pairs.
///
/// Pairs move as a unit, so the real part always precedes the imaginary
/// part. No conjugation is applied.
///
/// ```
/// use dspmat::{matrix, Complex, Matrix, MatrixView};
///
/// let src = [Complex::new(1.0_f32, 2.0), Complex::new(3.0, 4.0)];
/// let mut out = [Complex::new(0.0_f32, 0.0); 2];
/// let src = MatrixView::bind(1, 2, &src).unwrap();
/// let mut dst = Matrix::bind(2, 1, &mut out).unwrap();
/// matrix::transpose_complex(&src, &mut dst).unwrap();
/// assert_eq!(out[1], Complex::new(3.0, 4.0));
/// ```
#[inline]
pub fn transpose_complex<T: Element>(
    src: &impl MatrixRef<Complex<T>>,
    dst: &mut impl MatrixMut<Complex<T>>,
) -> Result<(), MatrixError> {
    transpose(src, dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FixedScale;
    use crate::{FixedPoint, Matrix, MatrixView, Q31, Q7};

    #[test]
    fn add_sub_f64() {
        let a = [1.0_f64, 2.0, 3.0, 4.0];
        let b = [0.5_f64, -2.0, 1.0, 10.0];
        let mut c = [0.0_f64; 4];
        let av = MatrixView::bind(2, 2, &a).unwrap();
        let bv = MatrixView::bind(2, 2, &b).unwrap();

        add(&av, &bv, &mut Matrix::bind(2, 2, &mut c).unwrap()).unwrap();
        assert_eq!(c, [1.5, 0.0, 4.0, 14.0]);

        sub(&av, &bv, &mut Matrix::bind(2, 2, &mut c).unwrap()).unwrap();
        assert_eq!(c, [0.5, 4.0, 2.0, -6.0]);
    }

    #[test]
    fn sub_saturates_q31() {
        let a = [Q31::MIN, Q31(10)];
        let b = [Q31(1), Q31(-5)];
        let mut c = [Q31(0); 2];
        sub(
            &MatrixView::bind(2, 1, &a).unwrap(),
            &MatrixView::bind(2, 1, &b).unwrap(),
            &mut Matrix::bind(2, 1, &mut c).unwrap(),
        )
        .unwrap();
        assert_eq!(c, [Q31::MIN, Q31(15)]);
    }

    #[test]
    fn scale_f32_and_q7() {
        let a = [1.0_f32, -2.0, 0.25];
        let mut c = [0.0_f32; 3];
        scale(
            &MatrixView::bind(3, 1, &a).unwrap(),
            2.0,
            &mut Matrix::bind(3, 1, &mut c).unwrap(),
        )
        .unwrap();
        assert_eq!(c, [2.0, -4.0, 0.5]);

        let q = [Q7::from_f32(0.5), Q7::from_f32(-0.5), Q7::MIN];
        let mut out = [Q7(0); 3];
        // 0.5 * 2^1 = 1.0
        let k = FixedScale::new(Q7::from_f32(0.5), 1);
        scale(
            &MatrixView::bind(1, 3, &q).unwrap(),
            k,
            &mut Matrix::bind(1, 3, &mut out).unwrap(),
        )
        .unwrap();
        assert_eq!(out, [Q7(64), Q7(-64), Q7::MIN]);
    }

    #[test]
    fn transpose_rectangular() {
        let a = [1, 2, 3, 4, 5, 6];
        let mut t = [0; 6];
        transpose(
            &MatrixView::bind(2, 3, &a).unwrap(),
            &mut Matrix::bind(3, 2, &mut t).unwrap(),
        )
        .unwrap();
        assert_eq!(t, [1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn transpose_complex_keeps_pair_order() {
        let a = [
            Complex::new(1, 10),
            Complex::new(2, 20),
            Complex::new(3, 30),
            Complex::new(4, 40),
            Complex::new(5, 50),
            Complex::new(6, 60),
        ];
        let mut t = [Complex::new(0, 0); 6];
        transpose_complex(
            &MatrixView::bind(3, 2, &a).unwrap(),
            &mut Matrix::bind(2, 3, &mut t).unwrap(),
        )
        .unwrap();
        assert_eq!(t[0], Complex::new(1, 10));
        assert_eq!(t[1], Complex::new(3, 30));
        assert_eq!(t[3], Complex::new(2, 20));
        assert_eq!(t[5], Complex::new(6, 60));
    }
}
