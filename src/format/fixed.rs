use core::ops::{Add, Mul, Neg, Sub};

use num_traits::{Bounded, Float, SaturatingAdd, SaturatingMul, SaturatingSub, Zero};

use super::{shr_round, FixedScale};
use crate::traits::{Arithmetic, FastArithmetic, FixedPoint, Scalable};

macro_rules! impl_fixed {
    ($name:ident, $raw:ty, $bits:expr, $acc:ty, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(pub $raw);

        impl $name {
            /// -1.0
            pub const MIN: Self = $name(<$raw>::MIN);
            /// Largest value below 1.0.
            pub const MAX: Self = $name(<$raw>::MAX);

            #[inline]
            pub const fn from_bits(raw: $raw) -> Self {
                $name(raw)
            }

            #[inline]
            pub const fn to_bits(self) -> $raw {
                self.0
            }
        }

        impl FixedPoint for $name {
            const FRACTIONAL_BITS: u32 = $bits;
            const MIN: Self = <$name>::MIN;
            const MAX: Self = <$name>::MAX;

            #[inline]
            fn saturate(wide: i64) -> Self {
                $name(wide.clamp(<$raw>::MIN as i64, <$raw>::MAX as i64) as $raw)
            }

            #[inline]
            fn raw(self) -> i64 {
                self.0 as i64
            }

            #[inline]
            fn from_f64(x: f64) -> Self {
                // `as` saturates out-of-range floats and maps NaN to 0.
                let scaled = Float::round(x * (1u64 << $bits) as f64);
                Self::saturate(scaled as i64)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self.0 as f64 / (1u64 << $bits) as f64
            }
        }

        impl Arithmetic for $name {
            type Acc = $acc;

            const ZERO: Self = $name(0);

            #[inline]
            fn acc_zero() -> $acc {
                0
            }

            #[inline]
            fn mac(acc: $acc, a: Self, b: Self) -> $acc {
                acc.saturating_add(a.0 as $acc * b.0 as $acc)
            }

            #[inline]
            fn msub(acc: $acc, a: Self, b: Self) -> $acc {
                acc.saturating_sub(a.0 as $acc * b.0 as $acc)
            }

            #[inline]
            fn narrow(acc: $acc) -> Self {
                Self::saturate((acc >> $bits) as i64)
            }

            #[inline]
            fn sat_add(self, rhs: Self) -> Self {
                $name(self.0.saturating_add(rhs.0))
            }

            #[inline]
            fn sat_sub(self, rhs: Self) -> Self {
                $name(self.0.saturating_sub(rhs.0))
            }
        }

        impl Scalable for $name {
            type Factor = FixedScale<$name>;

            /// `saturate(round(self * fract * 2^shift))`.
            #[inline]
            fn scale(self, factor: FixedScale<$name>) -> Self {
                let product = self.raw() * factor.fract.raw();
                Self::saturate(shr_round(product, $bits as i32 - factor.shift as i32))
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self.sat_add(rhs)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self.sat_sub(rhs)
            }
        }

        /// Fractional multiply: `(a * b) >> bits`, saturated.
        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self::saturate((self.raw() * rhs.raw()) >> $bits)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $name(self.0.saturating_neg())
            }
        }

        impl Zero for $name {
            #[inline]
            fn zero() -> Self {
                $name(0)
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl Bounded for $name {
            #[inline]
            fn min_value() -> Self {
                <$name>::MIN
            }

            #[inline]
            fn max_value() -> Self {
                <$name>::MAX
            }
        }

        impl SaturatingAdd for $name {
            #[inline]
            fn saturating_add(&self, v: &Self) -> Self {
                *self + *v
            }
        }

        impl SaturatingSub for $name {
            #[inline]
            fn saturating_sub(&self, v: &Self) -> Self {
                *self - *v
            }
        }

        impl SaturatingMul for $name {
            #[inline]
            fn saturating_mul(&self, v: &Self) -> Self {
                *self * *v
            }
        }
    };
}

impl_fixed!(Q7, i8, 7, i32, "Q7 fixed point: 1 sign bit, 7 fractional bits.");
impl_fixed!(Q15, i16, 15, i64, "Q15 fixed point: 1 sign bit, 15 fractional bits.");
impl_fixed!(Q31, i32, 31, i64, "Q31 fixed point: 1 sign bit, 31 fractional bits.");

/// Full 2.30 products summed in a wrapping 32-bit register.
impl FastArithmetic for Q15 {
    type FastAcc = i32;

    #[inline]
    fn fast_acc_zero() -> i32 {
        0
    }

    #[inline]
    fn fast_mac(acc: i32, a: Self, b: Self) -> i32 {
        acc.wrapping_add(a.0 as i32 * b.0 as i32)
    }

    #[inline]
    fn fast_narrow(acc: i32) -> Self {
        Self::saturate((acc >> 15) as i64)
    }
}

/// Products truncated to 2.30 (upper 32 bits), summed in a wrapping 32-bit
/// register, then shifted back to 1.31.
impl FastArithmetic for Q31 {
    type FastAcc = i32;

    #[inline]
    fn fast_acc_zero() -> i32 {
        0
    }

    #[inline]
    fn fast_mac(acc: i32, a: Self, b: Self) -> i32 {
        acc.wrapping_add(((a.0 as i64 * b.0 as i64) >> 32) as i32)
    }

    #[inline]
    fn fast_narrow(acc: i32) -> Self {
        Self::saturate((acc as i64) << 1)
    }
}
