//! Scalar types, both the custom element types that can be stored in tensors and the boxed [`ScalarValue`] passed
//! to kernels as an argument.
//!
//! Half precision floating point types are provided by the `half` crate, as kernels compute on them.
//!
//! Complex numbers are provided by the `num-complex` feature if enabled, otherwise a simple struct with real and
//! imaginary parts is provided without any arithmetic operations. Complex tensors can be created, but no kernel in
//! this crate accepts them.

pub use half::bf16;
pub use half::f16;

cfg_if::cfg_if! { if #[cfg(feature = "num-complex")] {
    pub use num_complex::Complex;
} else {
    /// A complex number in Cartesian form.
    ///
    /// Doesn't provide any arithmetic operations, but expose the real and imaginary parts.
    /// Enable the `num-complex` feature to get a fully functional `Complex` type.
    #[derive(Copy, Clone, Debug, Default, PartialEq)]
    #[repr(C)]
    pub struct Complex<T> {
        /// Real portion of the complex number
        pub re: T,
        /// Imaginary portion of the complex number
        pub im: T,
    }
} }

/// The representation a [`ScalarValue`] was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Tag for value `bool`.
    Bool,
    /// Tag for value `i64`.
    Int,
    /// Tag for value `f64`.
    Double,
}

/// A dynamically typed numeric value, the kernel argument counterpart of a tensor element.
///
/// A scalar carries its own source representation, independent of the element type of any tensor. Kernels convert
/// it to the element type they operate on using [`scalar_to`](crate::kernel::scalar_to).
///
/// ```rust
/// use executorch_kernels::scalar::{ScalarValue, Tag};
///
/// let value = ScalarValue::from(2.5);
/// assert_eq!(value.tag(), Tag::Double);
/// assert_eq!(value.to::<i32>(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue {
    /// A boolean value.
    Bool(bool),
    /// An integral value.
    Int(i64),
    /// A floating point value.
    Double(f64),
}
impl ScalarValue {
    /// Get the tag of the value.
    pub fn tag(&self) -> Tag {
        match self {
            ScalarValue::Bool(_) => Tag::Bool,
            ScalarValue::Int(_) => Tag::Int,
            ScalarValue::Double(_) => Tag::Double,
        }
    }

    /// Returns `true` if the value is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, ScalarValue::Bool(_))
    }

    /// Returns `true` if the value is integral, optionally considering booleans as integral.
    pub fn is_integral(&self, include_bool: bool) -> bool {
        match self {
            ScalarValue::Int(_) => true,
            ScalarValue::Bool(_) => include_bool,
            ScalarValue::Double(_) => false,
        }
    }

    /// Returns `true` if the value is a floating point number.
    pub fn is_floating_point(&self) -> bool {
        matches!(self, ScalarValue::Double(_))
    }

    /// Convert the value into a tensor element type `T`.
    ///
    /// See [`scalar_to`](crate::kernel::scalar_to) for the conversion rules.
    pub fn to<T: crate::kernel::ScalarCast>(&self) -> T {
        crate::kernel::scalar_to(self)
    }
}
impl Default for ScalarValue {
    fn default() -> Self {
        ScalarValue::Int(0)
    }
}

macro_rules! impl_from_for_scalar_value {
    ($variant:ident, $repr:ty, [$($rust_type:ty),*]) => {
        $(
            impl From<$rust_type> for ScalarValue {
                fn from(value: $rust_type) -> Self {
                    ScalarValue::$variant(value as $repr)
                }
            }
        )*
    };
}
impl_from_for_scalar_value!(Int, i64, [i8, i16, i32, i64, u8, u16, u32]);
impl_from_for_scalar_value!(Double, f64, [f32, f64]);
impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}
impl From<f16> for ScalarValue {
    fn from(value: f16) -> Self {
        ScalarValue::Double(value.to_f64())
    }
}
impl From<bf16> for ScalarValue {
    fn from(value: bf16) -> Self {
        ScalarValue::Double(value.to_f64())
    }
}
