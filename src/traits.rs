use core::fmt::Debug;
use num_traits::Float;

/// Trait for types that can be stored in a matrix buffer.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, [`Q7`](crate::Q7), [`Q15`](crate::Q15),
/// [`Q31`](crate::Q31) and `Complex<_>` of any of them. Data movement
/// (transpose) only needs this.
pub trait Element: Copy + PartialEq + Debug + Default {}

impl<T: Copy + PartialEq + Debug + Default> Element for T {}

/// Arithmetic capability of a numeric format.
///
/// Elementwise and multiply kernels are written once against this trait and
/// monomorphized per format. Fixed-point formats saturate; floats follow IEEE.
pub trait Arithmetic: Element {
    /// Accumulator for sums of products. At least twice the element width
    /// for fixed-point formats so a dot product narrows exactly once.
    type Acc: Copy;

    /// Additive identity of the element type.
    const ZERO: Self;

    /// Empty accumulator.
    fn acc_zero() -> Self::Acc;

    /// `acc + a * b` at accumulator precision.
    fn mac(acc: Self::Acc, a: Self, b: Self) -> Self::Acc;

    /// `acc - a * b` at accumulator precision.
    fn msub(acc: Self::Acc, a: Self, b: Self) -> Self::Acc;

    /// Narrow an accumulator back to the element format.
    fn narrow(acc: Self::Acc) -> Self;

    /// Saturating addition.
    fn sat_add(self, rhs: Self) -> Self;

    /// Saturating subtraction.
    fn sat_sub(self, rhs: Self) -> Self;
}

/// Formats that can be multiplied by a scale factor.
///
/// Floats scale by a value of their own type; fixed-point formats scale by a
/// [`FixedScale`](crate::format::FixedScale) pair.
pub trait Scalable: Arithmetic {
    type Factor: Copy;

    fn scale(self, factor: Self::Factor) -> Self;
}

/// Fixed-point formats with a narrow "fast" accumulator.
///
/// The fast accumulator wraps instead of saturating between products. Callers
/// opt in and keep inputs within the safe range: scaled down by
/// `log2(inner dimension)` bits.
pub trait FastArithmetic: Arithmetic {
    type FastAcc: Copy;

    fn fast_acc_zero() -> Self::FastAcc;

    fn fast_mac(acc: Self::FastAcc, a: Self, b: Self) -> Self::FastAcc;

    fn fast_narrow(acc: Self::FastAcc) -> Self;
}

/// Signed fixed-point formats: `raw / 2^FRACTIONAL_BITS`.
pub trait FixedPoint: Scalable + Ord {
    /// Number of fractional bits.
    const FRACTIONAL_BITS: u32;
    /// Most negative representable value (-1.0).
    const MIN: Self;
    /// Most positive representable value (1.0 - 2^-bits).
    const MAX: Self;

    /// Clamp a wide integer into the format.
    fn saturate(wide: i64) -> Self;

    /// Raw integer value, widened.
    fn raw(self) -> i64;

    /// Nearest representable value, saturating outside `[-1, 1)`.
    fn from_f64(x: f64) -> Self;

    fn to_f64(self) -> f64;

    #[inline]
    fn from_f32(x: f32) -> Self {
        Self::from_f64(x as f64)
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }
}

/// Trait for floating-point elements.
///
/// Required by the decomposition engine (`sqrt`, `abs`, division).
pub trait FloatFormat: Arithmetic<Acc = Self> + Scalable<Factor = Self> + Float {
    /// Default near-zero threshold for pivots, diagonal residuals and norms.
    const DEFAULT_THRESHOLD: Self;
}

/// Read-only access to a row-major matrix.
///
/// Element `(i, j)` lives at `as_slice()[i * ncols + j]`.
pub trait MatrixRef<T> {
    fn rows(&self) -> u16;
    fn cols(&self) -> u16;
    fn as_slice(&self) -> &[T];

    #[inline]
    fn nrows(&self) -> usize {
        self.rows() as usize
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.cols() as usize
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.as_slice()[row * self.ncols() + col]
    }

    /// Contiguous slice of row `row`.
    #[inline]
    fn row(&self, row: usize) -> &[T] {
        let n = self.ncols();
        &self.as_slice()[row * n..(row + 1) * n]
    }
}

/// Mutable access to a row-major matrix.
///
/// Extends `MatrixRef` so in-place algorithms write through the
/// caller's buffer.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn as_mut_slice(&mut self) -> &mut [T];

    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let n = self.ncols();
        &mut self.as_mut_slice()[row * n + col]
    }

    #[inline]
    fn row_mut(&mut self, row: usize) -> &mut [T] {
        let n = self.ncols();
        &mut self.as_mut_slice()[row * n..(row + 1) * n]
    }

    /// Overwrite every element with `value`.
    #[inline]
    fn fill(&mut self, value: T)
    where
        T: Copy,
    {
        for x in self.as_mut_slice().iter_mut() {
            *x = value;
        }
    }
}
