use crate::traits::{Arithmetic, FloatFormat, Scalable};

/// Concrete impls for IEEE floats: plain arithmetic, no saturation.
macro_rules! impl_float_format {
    ($($t:ty => $threshold:expr),*) => {
        $(
            impl Arithmetic for $t {
                type Acc = $t;

                const ZERO: $t = 0.0;

                #[inline] fn acc_zero() -> $t { 0.0 }
                #[inline] fn mac(acc: $t, a: $t, b: $t) -> $t { acc + a * b }
                #[inline] fn msub(acc: $t, a: $t, b: $t) -> $t { acc - a * b }
                #[inline] fn narrow(acc: $t) -> $t { acc }
                #[inline] fn sat_add(self, rhs: $t) -> $t { self + rhs }
                #[inline] fn sat_sub(self, rhs: $t) -> $t { self - rhs }
            }

            impl Scalable for $t {
                type Factor = $t;

                #[inline] fn scale(self, factor: $t) -> $t { self * factor }
            }

            impl FloatFormat for $t {
                const DEFAULT_THRESHOLD: $t = $threshold;
            }
        )*
    };
}

impl_float_format!(f32 => 1.0e-12, f64 => 1.0e-16);
