//! Numeric format layer.
//!
//! Element representations the engine operates on and the saturating
//! primitives every kernel delegates to:
//!
//! | Format | Storage | Accumulator | Fast accumulator |
//! |--------|---------|-------------|------------------|
//! | `f32`  | `f32`   | `f32`       | -                |
//! | `f64`  | `f64`   | `f64`       | -                |
//! | [`Q7`] | `i8`    | `i32`       | -                |
//! | [`Q15`]| `i16`   | `i64`       | `i32` (2.30)     |
//! | [`Q31`]| `i32`   | `i64`       | `i32` (2.30)     |
//!
//! Fixed-point values are `raw / 2^bits`. Overflow always clamps to the
//! format's min/max; it never wraps.

mod fixed;
mod float;

pub use fixed::{Q15, Q31, Q7};

/// Fixed-point scale factor: `fract * 2^shift`.
///
/// The fractional part alone cannot reach 1.0, so factors of magnitude one or
/// more are expressed through a positive `shift`.
///
/// ```
/// use dspmat::format::FixedScale;
/// use dspmat::{FixedPoint, Q15, Scalable};
///
/// // 0.75 = 0.375 * 2^1
/// let k = FixedScale::new(Q15::from_f32(0.375), 1);
/// assert_eq!(Q15::from_f32(0.5).scale(k), Q15::from_f32(0.375));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedScale<T> {
    /// Fractional multiplier.
    pub fract: T,
    /// Post-multiply left shift (negative shifts right).
    pub shift: i8,
}

impl<T> FixedScale<T> {
    pub const fn new(fract: T, shift: i8) -> Self {
        Self { fract, shift }
    }
}

/// Arithmetic shift right with round-to-nearest.
///
/// `shift > 0` adds half of the discarded weight before shifting, so ties
/// round toward positive infinity. `shift <= 0` shifts left by `-shift`,
/// saturating at the `i64` bounds.
///
/// ```
/// use dspmat::format::shr_round;
/// assert_eq!(shr_round(5, 1), 3);
/// assert_eq!(shr_round(-5, 1), -2);
/// assert_eq!(shr_round(-7, 1), -3);
/// assert_eq!(shr_round(3, -2), 12);
/// assert_eq!(shr_round(i64::MAX, -1), i64::MAX);
/// ```
#[inline]
pub fn shr_round(value: i64, shift: i32) -> i64 {
    if shift > 0 {
        // Past 64 bits every i64 rounds to zero, same as shifting by 64.
        let s = shift.min(64) as u32;
        let half = 1i128 << (s - 1);
        ((value as i128 + half) >> s) as i64
    } else {
        let s = shift.unsigned_abs().min(64);
        let wide = (value as i128) << s;
        wide.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shr_round_positive_ties_up() {
        assert_eq!(shr_round(1, 1), 1);
        assert_eq!(shr_round(2, 2), 1);
        assert_eq!(shr_round(1, 2), 0);
        assert_eq!(shr_round(-1, 1), 0);
        assert_eq!(shr_round(-3, 1), -1);
    }

    #[test]
    fn shr_round_zero_is_identity() {
        assert_eq!(shr_round(-12345, 0), -12345);
        assert_eq!(shr_round(i64::MIN, 0), i64::MIN);
    }

    #[test]
    fn shr_round_large_shifts() {
        assert_eq!(shr_round(i64::MAX, 64), 0);
        assert_eq!(shr_round(i64::MIN, 64), 0);
        assert_eq!(shr_round(i64::MAX, 200), 0);
        assert_eq!(shr_round(i64::MAX, 63), 1);
    }

    #[test]
    fn shr_round_left_saturates() {
        assert_eq!(shr_round(1, -62), 1 << 62);
        assert_eq!(shr_round(1, -63), i64::MAX);
        assert_eq!(shr_round(-1, -63), i64::MIN);
        assert_eq!(shr_round(-3, -200), i64::MIN);
        assert_eq!(shr_round(0, -200), 0);
    }
}
