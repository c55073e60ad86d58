use crate::scalar::{bf16, f16, ScalarValue};
use crate::tensor::Scalar;

/// Element types a [`ScalarValue`] can be converted into.
///
/// Implemented for every non-complex [`Scalar`] type.
pub trait ScalarCast: Scalar {
    /// Convert a boolean into `Self`, `true` becoming one and `false` zero.
    fn from_bool(value: bool) -> Self;
    /// Convert an integer into `Self`.
    fn from_i64(value: i64) -> Self;
    /// Convert a floating point number into `Self`.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar_cast_primitive {
    ($($rust_type:ty),*) => {
        $(
            impl ScalarCast for $rust_type {
                fn from_bool(value: bool) -> Self {
                    value as u8 as $rust_type
                }
                fn from_i64(value: i64) -> Self {
                    value as $rust_type
                }
                fn from_f64(value: f64) -> Self {
                    value as $rust_type
                }
            }
        )*
    };
}
impl_scalar_cast_primitive!(u8, i8, i16, i32, i64, u16, u32, u64, f32, f64);

macro_rules! impl_scalar_cast_half {
    ($($rust_type:ty),*) => {
        $(
            impl ScalarCast for $rust_type {
                fn from_bool(value: bool) -> Self {
                    if value { <$rust_type>::ONE } else { <$rust_type>::ZERO }
                }
                fn from_i64(value: i64) -> Self {
                    <$rust_type>::from_f64(value as f64)
                }
                fn from_f64(value: f64) -> Self {
                    <$rust_type>::from_f64(value)
                }
            }
        )*
    };
}
impl_scalar_cast_half!(f16, bf16);

impl ScalarCast for bool {
    fn from_bool(value: bool) -> Self {
        value
    }
    fn from_i64(value: i64) -> Self {
        value != 0
    }
    fn from_f64(value: f64) -> Self {
        value != 0.0
    }
}

/// Convert a [`ScalarValue`] into the element type `T`.
///
/// The conversion always produces a value, possibly losing precision:
/// - Integers are truncated (wrapping) to narrower integer types.
/// - Floating point numbers are rounded toward zero and saturated when converted to integer types, NaN becomes zero.
/// - Any non-zero value (including NaN) becomes `true` when converted to `bool`.
/// - Conversions to [`f16`] and [`bf16`] round to the nearest representable value, ties to even. Integers are
///   first converted to `f64`, so an integer wider than 53 bits is rounded twice and may land one step away from
///   the nearest [`f16`]/[`bf16`] value.
pub fn scalar_to<T: ScalarCast>(value: &ScalarValue) -> T {
    match *value {
        ScalarValue::Bool(b) => T::from_bool(b),
        ScalarValue::Int(i) => T::from_i64(i),
        ScalarValue::Double(d) => T::from_f64(d),
    }
}
