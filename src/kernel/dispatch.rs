//! Runtime element type to compile time type dispatch.
//!
//! The element type of a tensor is only known at run time, while elementwise loops should run on the native Rust
//! type of the elements. The `switch_*` macros bridge the two: each one matches a [`ScalarType`] against the
//! members of a [`TypeFamily`] and evaluates a body with a type alias bound to the matching Rust type.
//!
//! ```rust
//! use executorch_kernels::kernel::{scalar_to, TypeFamily};
//! use executorch_kernels::scalar::ScalarValue;
//! use executorch_kernels::tensor::{Scalar, ScalarType};
//! use executorch_kernels::KernelError;
//!
//! fn element_type_of(dtype: ScalarType) -> Result<ScalarType, KernelError> {
//!     executorch_kernels::switch_realhbf16_types!(dtype, "example", CTYPE => {
//!         let _one: CTYPE = scalar_to(&ScalarValue::from(1));
//!         <CTYPE as Scalar>::TYPE
//!     })
//! }
//! assert_eq!(element_type_of(ScalarType::Half), Ok(ScalarType::Half));
//! assert!(element_type_of(ScalarType::Bool).is_err());
//! assert!(!TypeFamily::RealHBF16.contains(ScalarType::Bool));
//! ```

use crate::tensor::ScalarType;
use crate::KernelError;

/// A closed set of element types an operator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    /// Signed and unsigned 8-bit integers, signed integers of 16, 32 and 64 bits, `f32` and `f64`.
    Real,
    /// [`Real`](TypeFamily::Real) types, `f16` and `bf16`.
    RealHBF16,
    /// [`RealHBF16`](TypeFamily::RealHBF16) types and `bool`.
    RealHBBF16,
}
impl TypeFamily {
    /// The element types of the family.
    pub fn members(self) -> &'static [ScalarType] {
        use ScalarType::*;
        match self {
            TypeFamily::Real => &[Byte, Char, Short, Int, Long, Float, Double],
            TypeFamily::RealHBF16 => &[Byte, Char, Short, Int, Long, Float, Double, Half, BFloat16],
            TypeFamily::RealHBBF16 => &[
                Byte, Char, Short, Int, Long, Float, Double, Half, BFloat16, Bool,
            ],
        }
    }

    /// Returns `true` if `dtype` is a member of the family.
    pub fn contains(self, dtype: ScalarType) -> bool {
        self.members().contains(&dtype)
    }

    /// The name of the family.
    pub fn name(self) -> &'static str {
        match self {
            TypeFamily::Real => "REAL",
            TypeFamily::RealHBF16 => "REALHBF16",
            TypeFamily::RealHBBF16 => "REALHBBF16",
        }
    }
}
impl core::fmt::Display for TypeFamily {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Report an element type that is not a member of the family an operator accepts.
///
/// Emits an error log entry and returns the matching [`KernelError::UnsupportedElementType`]. Called by the
/// fallback arm of the `switch_*` macros.
pub fn unsupported_dtype(dtype: ScalarType, op: &'static str, family: TypeFamily) -> KernelError {
    crate::log::error!("Unhandled dtype {} for {} (expected one of {})", dtype, op, family);
    KernelError::UnsupportedElementType { dtype, op }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __switch_types {
    ($dtype:expr, $op:expr, $family:ident, $ctype:ident => $body:expr, [$($variant:ident $rust_type:ty),* $(,)?]) => {
        match $dtype {
            $(
                $crate::tensor::ScalarType::$variant => {
                    #[allow(dead_code, non_camel_case_types, clippy::upper_case_acronyms)]
                    type $ctype = $rust_type;
                    ::core::result::Result::Ok($body)
                }
            )*
            #[allow(unreachable_patterns)]
            dtype => ::core::result::Result::Err($crate::kernel::unsupported_dtype(
                dtype,
                $op,
                $crate::kernel::TypeFamily::$family,
            )),
        }
    };
}

/// Dispatch on a [`ScalarType`] of the [`TypeFamily::Real`] family.
///
/// `switch_real_types!(dtype, op_name, CTYPE => body)` evaluates to `Ok(body)` with `CTYPE` an alias of the Rust
/// type matching `dtype`, or to `Err(KernelError::UnsupportedElementType)` without evaluating `body` if `dtype` is
/// not in the family. `op_name` is a `&'static str` used for diagnostics.
#[macro_export]
macro_rules! switch_real_types {
    ($dtype:expr, $op:expr, $ctype:ident => $body:expr) => {
        $crate::__switch_types!($dtype, $op, Real, $ctype => $body, [
            Byte u8,
            Char i8,
            Short i16,
            Int i32,
            Long i64,
            Float f32,
            Double f64,
        ])
    };
}

/// Dispatch on a [`ScalarType`] of the [`TypeFamily::RealHBF16`] family.
///
/// See [`switch_real_types`](crate::switch_real_types) for the syntax.
#[macro_export]
macro_rules! switch_realhbf16_types {
    ($dtype:expr, $op:expr, $ctype:ident => $body:expr) => {
        $crate::__switch_types!($dtype, $op, RealHBF16, $ctype => $body, [
            Byte u8,
            Char i8,
            Short i16,
            Int i32,
            Long i64,
            Float f32,
            Double f64,
            Half $crate::scalar::f16,
            BFloat16 $crate::scalar::bf16,
        ])
    };
}

/// Dispatch on a [`ScalarType`] of the [`TypeFamily::RealHBBF16`] family.
///
/// See [`switch_real_types`](crate::switch_real_types) for the syntax.
#[macro_export]
macro_rules! switch_realhbbf16_types {
    ($dtype:expr, $op:expr, $ctype:ident => $body:expr) => {
        $crate::__switch_types!($dtype, $op, RealHBBF16, $ctype => $body, [
            Byte u8,
            Char i8,
            Short i16,
            Int i32,
            Long i64,
            Float f32,
            Double f64,
            Half $crate::scalar::f16,
            BFloat16 $crate::scalar::bf16,
            Bool bool,
        ])
    };
}
