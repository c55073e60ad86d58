use std::fmt;

use super::{Scalar, ScalarType, Tensor};
use crate::scalar::{bf16, f16, Complex};

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn data_field<S: Scalar + fmt::Debug>(this: &Tensor, f: &mut fmt::Formatter) -> fmt::Result {
            cfg_if::cfg_if! { if #[cfg(feature = "ndarray")] {
                match this.as_array_dyn::<S>() {
                    Some(array) => fmt::Debug::fmt(&array, f),
                    None => f.write_str("[...]"),
                }
            } else {
                match this.as_slice::<S>() {
                    Some(data) => fmt::Debug::fmt(data, f),
                    None => f.write_str("[...]"),
                }
            } }
        }
        struct Data<'a>(&'a Tensor);
        impl fmt::Debug for Data<'_> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self.0.scalar_type() {
                    ScalarType::Byte => data_field::<u8>(self.0, f),
                    ScalarType::Char => data_field::<i8>(self.0, f),
                    ScalarType::Short => data_field::<i16>(self.0, f),
                    ScalarType::Int => data_field::<i32>(self.0, f),
                    ScalarType::Long => data_field::<i64>(self.0, f),
                    ScalarType::Half => data_field::<f16>(self.0, f),
                    ScalarType::Float => data_field::<f32>(self.0, f),
                    ScalarType::Double => data_field::<f64>(self.0, f),
                    ScalarType::ComplexHalf => data_field::<Complex<f16>>(self.0, f),
                    ScalarType::ComplexFloat => data_field::<Complex<f32>>(self.0, f),
                    ScalarType::ComplexDouble => data_field::<Complex<f64>>(self.0, f),
                    ScalarType::Bool => data_field::<bool>(self.0, f),
                    ScalarType::BFloat16 => data_field::<bf16>(self.0, f),
                    ScalarType::UInt16 => data_field::<u16>(self.0, f),
                    ScalarType::UInt32 => data_field::<u32>(self.0, f),
                    ScalarType::UInt64 => data_field::<u64>(self.0, f),
                }
            }
        }

        f.debug_struct("Tensor")
            .field("scalar_type", &self.scalar_type())
            .field("sizes", &self.sizes())
            .field("dim_order", &self.dim_order())
            .field("dynamism", &self.shape_dynamism())
            .field("data", &Data(self))
            .finish()
    }
}
