//! Decomposition engine, triangular solvers and inversion (floating point).
//!
//! Every entry point runs to completion on the calling thread with no
//! allocation: outputs and scratch space are caller-provided. Numerical
//! failures abort early and leave outputs partially written.
//!
//! Thresholds default to [`FloatFormat::DEFAULT_THRESHOLD`]
//! (`1e-12` for `f32`, `1e-16` for `f64`); the `*_with_threshold` variants
//! take one explicitly. QR always takes its threshold from the caller.

mod cholesky;
mod inverse;
mod ldlt;
mod qr;
mod triangular;

pub use cholesky::{cholesky, cholesky_with_threshold};
pub use inverse::{inverse, inverse_with_threshold};
pub use ldlt::{ldlt, ldlt_with_threshold};
pub use qr::{householder, householder_in_place, qr};
pub use triangular::{
    solve_lower_triangular, solve_lower_triangular_with_threshold, solve_upper_triangular,
    solve_upper_triangular_with_threshold,
};

use crate::traits::{FloatFormat, MatrixMut};

/// Get mutable references to rows `i` and `j` of a row-major buffer
/// simultaneously, each starting at column `col_start`. Requires `i != j`.
#[inline]
pub(crate) fn two_rows_mut<T>(
    data: &mut [T],
    ncols: usize,
    i: usize,
    j: usize,
    col_start: usize,
) -> (&mut [T], &mut [T]) {
    debug_assert_ne!(i, j);
    let (lo, hi) = (i.min(j), i.max(j));
    let (head, tail) = data.split_at_mut(hi * ncols);
    let lo_row = &mut head[lo * ncols + col_start..(lo + 1) * ncols];
    let hi_row = &mut tail[col_start..ncols];
    if i < j {
        (lo_row, hi_row)
    } else {
        (hi_row, lo_row)
    }
}

/// Swap rows `i` and `j` from column `col_start` onward.
#[inline]
pub(crate) fn swap_rows<T>(data: &mut [T], ncols: usize, i: usize, j: usize, col_start: usize) {
    if i != j {
        let (a, b) = two_rows_mut(data, ncols, i, j, col_start);
        a.swap_with_slice(b);
    }
}

/// Swap columns `i` and `j` of every row.
#[inline]
pub(crate) fn swap_cols<T>(data: &mut [T], ncols: usize, i: usize, j: usize) {
    if i != j {
        for row in data.chunks_exact_mut(ncols) {
            row.swap(i, j);
        }
    }
}

/// `row[dst] -= v * row[src]` from column `col_start` onward.
#[inline]
pub(crate) fn mas_row<T: FloatFormat>(
    data: &mut [T],
    ncols: usize,
    dst: usize,
    v: T,
    src: usize,
    col_start: usize,
) {
    let (d, s) = two_rows_mut(data, ncols, dst, src, col_start);
    for (x, &y) in d.iter_mut().zip(s.iter()) {
        *x = *x - v * y;
    }
}

/// Overwrite a square matrix with the identity.
#[inline]
pub(crate) fn set_identity<T: FloatFormat>(m: &mut impl MatrixMut<T>) {
    let n = m.ncols();
    m.fill(T::zero());
    for i in 0..m.nrows().min(n) {
        *m.get_mut(i, i) = T::one();
    }
}
