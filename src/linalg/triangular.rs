use crate::error::MatrixError;
use crate::traits::{FloatFormat, MatrixMut, MatrixRef};

#[cfg_attr(not(feature = "matrix-check"), allow(dead_code))]
#[inline]
fn solve_shape<T>(
    t: &impl MatrixRef<T>,
    a: &impl MatrixRef<T>,
    dst: &impl MatrixRef<T>,
) -> bool {
    t.rows() == t.cols()
        && a.rows() == t.rows()
        && dst.rows() == a.rows()
        && dst.cols() == a.cols()
}

/// Index of the first diagonal entry of `t` at or below `threshold` in magnitude.
fn small_diagonal<T: FloatFormat>(t: &[T], n: usize, threshold: T) -> Option<usize> {
    (0..n).find(|&i| !(t[i * n + i].abs() > threshold))
}

/// Solve `UT * X = A` for upper-triangular `UT` with the default threshold.
#[inline]
pub fn solve_upper_triangular<T: FloatFormat>(
    ut: &impl MatrixRef<T>,
    a: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
) -> Result<(), MatrixError> {
    solve_upper_triangular_with_threshold(ut, a, dst, T::DEFAULT_THRESHOLD)
}

/// Solve `UT * X = A` by back substitution, one column of `A` at a time.
///
/// `ut` is `n × n` (only its upper triangle is read), `a` and `dst` are
/// `n × k`. Returns [`MatrixError::Singular`] before any division if a
/// diagonal entry of `ut` is at or below `threshold` in magnitude.
///
/// ```
/// use dspmat::{linalg, Matrix, MatrixView};
///
/// let ut = [2.0_f64, 1.0, 0.0, 4.0];
/// let b = [5.0, 8.0];
/// let mut x = [0.0; 2];
/// linalg::solve_upper_triangular(
///     &MatrixView::bind(2, 2, &ut).unwrap(),
///     &MatrixView::bind(2, 1, &b).unwrap(),
///     &mut Matrix::bind(2, 1, &mut x).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(x, [1.5, 2.0]);
/// ```
pub fn solve_upper_triangular_with_threshold<T: FloatFormat>(
    ut: &impl MatrixRef<T>,
    a: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
    threshold: T,
) -> Result<(), MatrixError> {
    check_size!(solve_shape(ut, a, dst));

    let n = ut.nrows();
    let k = a.ncols();
    let t = ut.as_slice();
    let b = a.as_slice();

    if let Some(i) = small_diagonal(t, n, threshold) {
        log::debug!("solve_upper_triangular: diagonal {} is {:?}", i, t[i * n + i]);
        return Err(MatrixError::Singular);
    }

    let x = dst.as_mut_slice();
    for c in 0..k {
        for i in (0..n).rev() {
            let mut s = b[i * k + c];
            for j in (i + 1)..n {
                s = s - t[i * n + j] * x[j * k + c];
            }
            x[i * k + c] = s / t[i * n + i];
        }
    }
    Ok(())
}

/// Solve `LT * X = A` for lower-triangular `LT` with the default threshold.
#[inline]
pub fn solve_lower_triangular<T: FloatFormat>(
    lt: &impl MatrixRef<T>,
    a: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
) -> Result<(), MatrixError> {
    solve_lower_triangular_with_threshold(lt, a, dst, T::DEFAULT_THRESHOLD)
}

/// Solve `LT * X = A` by forward substitution.
///
/// Mirror image of [`solve_upper_triangular_with_threshold`]; only the lower
/// triangle of `lt` is read.
pub fn solve_lower_triangular_with_threshold<T: FloatFormat>(
    lt: &impl MatrixRef<T>,
    a: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
    threshold: T,
) -> Result<(), MatrixError> {
    check_size!(solve_shape(lt, a, dst));

    let n = lt.nrows();
    let k = a.ncols();
    let t = lt.as_slice();
    let b = a.as_slice();

    if let Some(i) = small_diagonal(t, n, threshold) {
        log::debug!("solve_lower_triangular: diagonal {} is {:?}", i, t[i * n + i]);
        return Err(MatrixError::Singular);
    }

    let x = dst.as_mut_slice();
    for c in 0..k {
        for i in 0..n {
            let mut s = b[i * k + c];
            for j in 0..i {
                s = s - t[i * n + j] * x[j * k + c];
            }
            x[i * k + c] = s / t[i * n + i];
        }
    }
    Ok(())
}
