use crate::scalar::{bf16, f16};

/// Element types with a total `min`/`max` that propagate NaN.
///
/// Implemented for the integer and real floating point [`Scalar`](crate::tensor::Scalar) types.
pub trait Real: Copy + PartialOrd {
    /// Returns `true` if the value is NaN. Always `false` for integer types.
    fn is_nan(self) -> bool;
}

macro_rules! impl_real {
    (int: $($rust_type:ty),*) => {
        $(
            impl Real for $rust_type {
                fn is_nan(self) -> bool {
                    false
                }
            }
        )*
    };
    (float: $($rust_type:ty),*) => {
        $(
            impl Real for $rust_type {
                fn is_nan(self) -> bool {
                    <$rust_type>::is_nan(self)
                }
            }
        )*
    };
}
impl_real!(int: u8, i8, i16, i32, i64, u16, u32, u64);
impl_real!(float: f32, f64, f16, bf16);

/// Returns the minimum of `a` and `b`, or NaN if either of them is NaN.
///
/// If neither is NaN and they compare equal, `a` is returned.
pub fn min_override<T: Real>(a: T, b: T) -> T {
    if a.is_nan() {
        a
    } else if b.is_nan() || b < a {
        b
    } else {
        a
    }
}

/// Returns the maximum of `a` and `b`, or NaN if either of them is NaN.
///
/// If neither is NaN and they compare equal, `a` is returned.
pub fn max_override<T: Real>(a: T, b: T) -> T {
    if a.is_nan() {
        a
    } else if b.is_nan() || a < b {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(min_override(3_i32, -4), -4);
        assert_eq!(max_override(3_i32, -4), 3);
        assert_eq!(min_override(7_u8, 7), 7);
        assert_eq!(max_override(u64::MAX, 0), u64::MAX);
    }

    #[test]
    fn floats() {
        assert_eq!(min_override(1.5_f32, 2.5), 1.5);
        assert_eq!(max_override(1.5_f64, 2.5), 2.5);
        assert_eq!(max_override(f32::NEG_INFINITY, -1e30), -1e30);
        assert_eq!(
            min_override(f16::from_f32(-1.0), f16::from_f32(0.5)),
            f16::from_f32(-1.0)
        );
        assert_eq!(
            max_override(bf16::from_f32(-1.0), bf16::from_f32(0.5)),
            bf16::from_f32(0.5)
        );
    }

    #[test]
    fn nan_propagates() {
        assert!(min_override(f32::NAN, 1.0).is_nan());
        assert!(min_override(1.0, f32::NAN).is_nan());
        assert!(max_override(f64::NAN, 1.0).is_nan());
        assert!(max_override(1.0, f64::NAN).is_nan());
        assert!(max_override(f16::NAN, f16::ONE).is_nan());
        assert!(min_override(bf16::ONE, bf16::NAN).is_nan());
    }

    #[test]
    fn equal_operands_return_first() {
        // -0.0 == 0.0, the first operand is kept
        assert!(min_override(-0.0_f32, 0.0).is_sign_negative());
        assert!(max_override(0.0_f32, -0.0).is_sign_positive());
    }
}
