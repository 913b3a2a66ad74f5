/// Failure status of a matrix operation.
///
/// Every fallible entry point returns `Result<(), MatrixError>`; `Ok(())` is
/// success. Size mismatches are detected before any write. Numerical failures
/// abort mid-algorithm and leave output buffers partially written.
///
/// ```
/// use dspmat::{linalg, Matrix, MatrixError, MatrixView};
///
/// let a = [1.0_f64, 5.0, 5.0, 1.0];
/// let mut l = [0.0_f64; 4];
/// let a = MatrixView::bind(2, 2, &a).unwrap();
/// let mut l = Matrix::bind(2, 2, &mut l).unwrap();
/// assert_eq!(linalg::cholesky(&a, &mut l), Err(MatrixError::DecompositionFailure));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand dimensions are incompatible with the operation.
    SizeMismatch,
    /// A system could not be solved: zero or near-zero pivot or column norm.
    Singular,
    /// The input does not admit the requested decomposition.
    DecompositionFailure,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::SizeMismatch => write!(f, "matrix dimensions do not match"),
            MatrixError::Singular => write!(f, "matrix is singular"),
            MatrixError::DecompositionFailure => {
                write!(f, "matrix does not admit the requested decomposition")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}
