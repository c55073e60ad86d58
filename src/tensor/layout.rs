//! Shape dynamism and dim order utilities.
//!
//! A tensor's storage is always dense; the dim order describes the order in which the dimensions are laid out in
//! memory, from the outermost to the innermost. The strides of a tensor are fully determined by its sizes and its
//! dim order.

use super::{DimOrderType, SizesType, StridesType, TENSOR_DIMENSION_LIMIT};
use crate::alloc::Vec;
use crate::{Error, Result};

/// Describes how a tensor's shape may change after it was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TensorShapeDynamism {
    /// The shape can not change. A resize to the current sizes is a no-op, any other resize fails.
    #[default]
    Static,
    /// The rank can not change, and the number of elements can not exceed the capacity reserved when the tensor
    /// was created.
    DynamicBound,
    /// The shape can change arbitrarily, the storage grows as needed.
    DynamicUnbound,
}

/// Returns `true` if the dim order is the identity permutation, i.e. the standard row major layout.
pub fn is_contiguous_dim_order(dim_order: &[DimOrderType]) -> bool {
    dim_order
        .iter()
        .enumerate()
        .all(|(i, &d)| d as usize == i)
}

/// Returns `true` if the dim order is a channels last layout of a 4D (`[0, 2, 3, 1]`) or 5D (`[0, 2, 3, 4, 1]`)
/// tensor.
pub fn is_channels_last_dim_order(dim_order: &[DimOrderType]) -> bool {
    let ndim = dim_order.len();
    if ndim != 4 && ndim != 5 {
        return false;
    }
    if dim_order[0] != 0 || dim_order[ndim - 1] != 1 {
        return false;
    }
    dim_order[1..ndim - 1]
        .iter()
        .enumerate()
        .all(|(i, &d)| d as usize == i + 2)
}

/// Check that `dim_order` is a permutation of `0..ndim` and that `ndim` is within [`TENSOR_DIMENSION_LIMIT`].
pub fn validate_dim_order(dim_order: &[DimOrderType], ndim: usize) -> Result<()> {
    if dim_order.len() != ndim || ndim > TENSOR_DIMENSION_LIMIT {
        return Err(Error::InvalidArgument);
    }
    let mut seen = 0_u64;
    for &d in dim_order {
        let d = d as usize;
        if d >= ndim || seen & (1 << d) != 0 {
            return Err(Error::InvalidArgument);
        }
        seen |= 1 << d;
    }
    Ok(())
}

/// Compute the strides of a dense tensor with the given sizes and dim order.
///
/// The innermost dimension has stride 1. A dimension of size zero does not scale the strides of the dimensions
/// outer to it.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `dim_order` is not a permutation of the dimensions of `sizes`, or if a
/// stride does not fit in [`StridesType`].
pub fn dim_order_to_strides(sizes: &[SizesType], dim_order: &[DimOrderType]) -> Result<Vec<StridesType>> {
    validate_dim_order(dim_order, sizes.len())?;
    let ndim = sizes.len();
    let mut strides = crate::alloc::vec![0 as StridesType; ndim];
    if ndim == 0 {
        return Ok(strides);
    }
    strides[dim_order[ndim - 1] as usize] = 1;
    for i in (0..ndim - 1).rev() {
        let inner = dim_order[i + 1] as usize;
        let inner_size = sizes[inner];
        strides[dim_order[i] as usize] = if inner_size == 0 {
            strides[inner]
        } else {
            strides[inner]
                .checked_mul(inner_size)
                .ok_or(Error::InvalidArgument)?
        };
    }
    Ok(strides)
}

/// Recover the dim order of a dense tensor from its strides.
///
/// Dimensions are ordered by decreasing stride, ties keep the natural order of the dimensions.
pub fn strides_to_dim_order(strides: &[StridesType]) -> Vec<DimOrderType> {
    let mut dim_order = (0..strides.len() as DimOrderType).collect::<Vec<_>>();
    dim_order.sort_by(|&a, &b| strides[b as usize].cmp(&strides[a as usize]));
    dim_order
}
