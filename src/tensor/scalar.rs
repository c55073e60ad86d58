use crate::{Error, Result};

/// Data types (dtypes) that can be used as element types in Tensors.
///
/// The discriminants are the numeric codes of the matching ExecuTorch scalar types. Codes of ExecuTorch types that
/// are not supported by this crate (quantized, bits and 8-bit floating point types) are rejected when converting
/// from a raw code, see the [`TryFrom<u8>`](#impl-TryFrom%3Cu8%3E-for-ScalarType) implementation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ScalarType {
    /// 8-bit unsigned integer, `u8`
    Byte = 0,
    /// 8-bit signed, integer, `i8`
    Char = 1,
    /// 16-bit signed integer, `i16`
    Short = 2,
    /// 32-bit signed integer, `i32`
    Int = 3,
    /// 64-bit signed integer, `i64`
    Long = 4,
    /// 16-bit floating point, [`executorch_kernels::scalar::f16`](`crate::scalar::f16`).
    Half = 5,
    /// 32-bit floating point, `f32`
    Float = 6,
    /// 64-bit floating point, `f64`
    Double = 7,
    /// 16-bit complex floating point, [`executorch_kernels::scalar::Complex<executorch_kernels::scalar::f16>`](`crate::scalar::Complex`).
    ComplexHalf = 8,
    /// 32-bit complex floating point, [`executorch_kernels::scalar::Complex<f32>`](`crate::scalar::Complex`).
    ComplexFloat = 9,
    /// 64-bit complex floating point, [`executorch_kernels::scalar::Complex<f64>`](`crate::scalar::Complex`).
    ComplexDouble = 10,
    /// Boolean, `bool`
    Bool = 11,
    /// 16-bit floating point using the bfloat16 format, [`executorch_kernels::scalar::bf16`](`crate::scalar::bf16`).
    BFloat16 = 15,
    /// 16-bit unsigned integer, `u16`
    UInt16 = 27,
    /// 32-bit unsigned integer, `u32`
    UInt32 = 28,
    /// 64-bit unsigned integer, `u64`
    UInt64 = 29,
}
impl ScalarType {
    /// All the scalar types, in the order of their numeric codes.
    pub const ALL: [ScalarType; 16] = [
        ScalarType::Byte,
        ScalarType::Char,
        ScalarType::Short,
        ScalarType::Int,
        ScalarType::Long,
        ScalarType::Half,
        ScalarType::Float,
        ScalarType::Double,
        ScalarType::ComplexHalf,
        ScalarType::ComplexFloat,
        ScalarType::ComplexDouble,
        ScalarType::Bool,
        ScalarType::BFloat16,
        ScalarType::UInt16,
        ScalarType::UInt32,
        ScalarType::UInt64,
    ];

    /// The name of the scalar type, as used in ExecuTorch diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Byte => "Byte",
            ScalarType::Char => "Char",
            ScalarType::Short => "Short",
            ScalarType::Int => "Int",
            ScalarType::Long => "Long",
            ScalarType::Half => "Half",
            ScalarType::Float => "Float",
            ScalarType::Double => "Double",
            ScalarType::ComplexHalf => "ComplexHalf",
            ScalarType::ComplexFloat => "ComplexFloat",
            ScalarType::ComplexDouble => "ComplexDouble",
            ScalarType::Bool => "Bool",
            ScalarType::BFloat16 => "BFloat16",
            ScalarType::UInt16 => "UInt16",
            ScalarType::UInt32 => "UInt32",
            ScalarType::UInt64 => "UInt64",
        }
    }

    /// Size in bytes of a single element of this type.
    pub fn element_size(self) -> usize {
        use core::mem::size_of;
        use crate::scalar::{bf16, f16, Complex};
        match self {
            ScalarType::Byte => size_of::<u8>(),
            ScalarType::Char => size_of::<i8>(),
            ScalarType::Short => size_of::<i16>(),
            ScalarType::Int => size_of::<i32>(),
            ScalarType::Long => size_of::<i64>(),
            ScalarType::Half => size_of::<f16>(),
            ScalarType::Float => size_of::<f32>(),
            ScalarType::Double => size_of::<f64>(),
            ScalarType::ComplexHalf => size_of::<Complex<f16>>(),
            ScalarType::ComplexFloat => size_of::<Complex<f32>>(),
            ScalarType::ComplexDouble => size_of::<Complex<f64>>(),
            ScalarType::Bool => size_of::<bool>(),
            ScalarType::BFloat16 => size_of::<bf16>(),
            ScalarType::UInt16 => size_of::<u16>(),
            ScalarType::UInt32 => size_of::<u32>(),
            ScalarType::UInt64 => size_of::<u64>(),
        }
    }

    /// Returns `true` for integral types, optionally considering `Bool` as integral.
    pub fn is_integral(self, include_bool: bool) -> bool {
        match self {
            ScalarType::Byte
            | ScalarType::Char
            | ScalarType::Short
            | ScalarType::Int
            | ScalarType::Long
            | ScalarType::UInt16
            | ScalarType::UInt32
            | ScalarType::UInt64 => true,
            ScalarType::Bool => include_bool,
            _ => false,
        }
    }

    /// Returns `true` for real floating point types, including the reduced precision ones.
    pub fn is_floating_point(self) -> bool {
        matches!(
            self,
            ScalarType::Half | ScalarType::Float | ScalarType::Double | ScalarType::BFloat16
        )
    }

    /// Returns `true` for the 16-bit floating point types, `Half` and `BFloat16`.
    pub fn is_reduced_floating_point(self) -> bool {
        matches!(self, ScalarType::Half | ScalarType::BFloat16)
    }

    /// Returns `true` for complex types.
    pub fn is_complex(self) -> bool {
        matches!(
            self,
            ScalarType::ComplexHalf | ScalarType::ComplexFloat | ScalarType::ComplexDouble
        )
    }

    /// Returns `true` if values of type `from` can be cast to type `to` without changing their category.
    ///
    /// Complex to non-complex, floating point to integral and non-bool to bool casts are refused.
    pub fn can_cast(from: ScalarType, to: ScalarType) -> bool {
        if from.is_complex() && !to.is_complex() {
            return false;
        }
        if from.is_floating_point() && to.is_integral(false) {
            return false;
        }
        if from != ScalarType::Bool && to == ScalarType::Bool {
            return false;
        }
        true
    }
}
impl core::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
impl TryFrom<u8> for ScalarType {
    type Error = Error;

    /// Convert an ExecuTorch scalar type code into a [`ScalarType`].
    ///
    /// Fails with [`Error::NotSupported`] for ExecuTorch types not supported by this crate, and with
    /// [`Error::InvalidType`] for unknown codes.
    fn try_from(code: u8) -> Result<Self> {
        Ok(match code {
            0 => ScalarType::Byte,
            1 => ScalarType::Char,
            2 => ScalarType::Short,
            3 => ScalarType::Int,
            4 => ScalarType::Long,
            5 => ScalarType::Half,
            6 => ScalarType::Float,
            7 => ScalarType::Double,
            8 => ScalarType::ComplexHalf,
            9 => ScalarType::ComplexFloat,
            10 => ScalarType::ComplexDouble,
            11 => ScalarType::Bool,
            15 => ScalarType::BFloat16,
            27 => ScalarType::UInt16,
            28 => ScalarType::UInt32,
            29 => ScalarType::UInt64,
            // quantized, bits and float8 types
            12..=14 | 16..=26 => return Err(Error::NotSupported),
            _ => return Err(Error::InvalidType),
        })
    }
}

/// A trait for types that can be used as scalar types in Tensors.
///
/// The trait is sealed, all of its implementors are plain data for which the all-zero bit pattern is a valid value.
pub trait Scalar: Copy + 'static {
    /// The [`ScalarType`] enum variant of the implementing type.
    const TYPE: ScalarType;
    private_decl! {}
}
macro_rules! impl_scalar {
    ($rust_type:path, $scalar_type_variant:ident) => {
        impl Scalar for $rust_type {
            const TYPE: ScalarType = ScalarType::$scalar_type_variant;
            private_impl! {}
        }
    };
}

impl_scalar!(u8, Byte);
impl_scalar!(i8, Char);
impl_scalar!(i16, Short);
impl_scalar!(i32, Int);
impl_scalar!(i64, Long);
impl_scalar!(crate::scalar::f16, Half);
impl_scalar!(f32, Float);
impl_scalar!(f64, Double);
impl_scalar!(crate::scalar::Complex<crate::scalar::f16>, ComplexHalf);
impl_scalar!(crate::scalar::Complex<f32>, ComplexFloat);
impl_scalar!(crate::scalar::Complex<f64>, ComplexDouble);
impl_scalar!(bool, Bool);
impl_scalar!(crate::scalar::bf16, BFloat16);
impl_scalar!(u16, UInt16);
impl_scalar!(u32, UInt32);
impl_scalar!(u64, UInt64);
