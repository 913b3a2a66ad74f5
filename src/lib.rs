//! # dspmat
//!
//! Multi-format dense matrix engine for DSP workloads, no-std compatible and
//! allocation free. Every operation works on caller-owned buffers described
//! by lightweight row-major handles.
//!
//! ## Quick start
//!
//! ```
//! use dspmat::{linalg, Matrix, MatrixView};
//!
//! // Solve A x = b through A = L L^T
//! let a = [4.0_f64, 12.0, -16.0, 12.0, 37.0, -43.0, -16.0, -43.0, 98.0];
//! let b = [-4.0, -15.0, 4.0];
//!
//! let mut l = [0.0; 9];
//! linalg::cholesky(
//!     &MatrixView::bind(3, 3, &a).unwrap(),
//!     &mut Matrix::bind(3, 3, &mut l).unwrap(),
//! )
//! .unwrap();
//!
//! let mut y = [0.0; 3];
//! let lv = MatrixView::bind(3, 3, &l).unwrap();
//! linalg::solve_lower_triangular(
//!     &lv,
//!     &MatrixView::bind(3, 1, &b).unwrap(),
//!     &mut Matrix::bind(3, 1, &mut y).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(y, [-2.0, -3.0, 1.0]);
//! ```
//!
//! ## Modules
//!
//! - [`format`]: `f32`, `f64` and the saturating fixed-point formats
//!   [`Q7`], [`Q15`], [`Q31`], plus the fixed-point scale factor.
//! - [`matrix`]: the [`Matrix`] / [`MatrixView`] handles, elementwise
//!   add/sub/scale/transpose and the multiplication kernels.
//! - [`linalg`]: Cholesky, pivoted LDL^T, Householder QR, triangular solves
//!   and Gauss-Jordan inversion (floating point only).
//! - [`traits`]: the arithmetic trait hierarchy and the
//!   [`MatrixRef`] / [`MatrixMut`] access traits every kernel is written against.
//!
//! ## Errors
//!
//! Fallible operations return `Result<(), MatrixError>`. Size mismatches are
//! detected before any write; numerical failures (`Singular`,
//! `DecompositionFailure`) abort mid-algorithm and leave outputs in an
//! unspecified state.
//!
//! ## Cargo features
//!
//! | Feature        | Default | Description |
//! |----------------|---------|-------------|
//! | `std`          | yes     | `std::error::Error` for [`MatrixError`], hardware float via std |
//! | `matrix-check` | yes     | Operand-shape checks on every operation |
//!
//! **Disabling `matrix-check` removes the shape checks entirely.** Operations
//! then trust the caller: mismatched operands produce unspecified output or
//! panic on an out-of-bounds index. [`Matrix::bind`] still validates buffer
//! lengths in every configuration.

#![cfg_attr(not(feature = "std"), no_std)]

/// Return `SizeMismatch` from the enclosing function unless `$cond` holds.
/// Compiled out without the `matrix-check` feature.
macro_rules! check_size {
    ($cond:expr) => {
        #[cfg(feature = "matrix-check")]
        {
            if !($cond) {
                log::debug!("size check failed: {}", stringify!($cond));
                return Err($crate::MatrixError::SizeMismatch);
            }
        }
    };
}

mod error;
pub mod format;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use error::MatrixError;
pub use format::{Q15, Q31, Q7};
pub use matrix::{Matrix, MatrixView};
pub use traits::{
    Arithmetic, Element, FastArithmetic, FixedPoint, FloatFormat, MatrixMut, MatrixRef, Scalable,
};

pub use num_complex::Complex;
