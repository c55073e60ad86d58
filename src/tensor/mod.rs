//! Dense tensors, the inputs and outputs of kernels.
//!
//! A [`Tensor`] owns a dense block of storage holding elements of a single runtime element type, described by the
//! [`ScalarType`] enum. Elements are accessed through typed views, which are available only for the Rust type
//! that implements [`Scalar`] for that element type:
//!
//! ```rust
//! use executorch_kernels::tensor::{ScalarType, Tensor};
//!
//! let mut tensor = Tensor::zeros(ScalarType::Int, &[2, 2]).unwrap();
//! tensor.as_mut_slice::<i32>().unwrap().copy_from_slice(&[1, 2, 3, 4]);
//! assert_eq!(tensor.get::<i32>(&[1, 0]), Some(&3));
//! assert!(tensor.as_slice::<f32>().is_none());
//! ```
//!
//! Beside its sizes, a tensor has a dim order, the order in which its dimensions are laid out in memory, and a
//! [`TensorShapeDynamism`] that determines how [`Tensor::set_sizes`] may change its shape.

mod accessor;
#[cfg(feature = "ndarray")]
mod array;
mod dense;
mod fmt;
mod layout;
mod scalar;
mod storage;

/// A type that represents the sizes (dimensions) of a tensor.
pub type SizesType = i32;
/// A type that represents the order of the dimensions of a tensor.
pub type DimOrderType = u8;
/// A type that represents the strides of a tensor.
pub type StridesType = i32;

/// The maximal number of dimensions of a tensor.
pub const TENSOR_DIMENSION_LIMIT: usize = 16;

pub use accessor::{TensorAccessor, TensorAccessorMut};
pub use dense::Tensor;
pub use layout::{
    dim_order_to_strides, is_channels_last_dim_order, is_contiguous_dim_order, strides_to_dim_order,
    validate_dim_order, TensorShapeDynamism,
};
pub use scalar::{Scalar, ScalarType};
