//! Precondition predicates over tensors.
//!
//! The predicates only read tensor metadata. They do not log; a kernel reports a failed predicate through
//! [`kernel_check`](super::kernel_check).

use crate::tensor::{is_channels_last_dim_order, is_contiguous_dim_order, Tensor};

/// Returns `true` if both tensors have the same element type.
pub fn tensors_have_same_dtype(a: &Tensor, b: &Tensor) -> bool {
    a.scalar_type() == b.scalar_type()
}

/// Returns `true` if the three tensors have the same element type.
pub fn tensors_have_same_dtype3(a: &Tensor, b: &Tensor, c: &Tensor) -> bool {
    tensors_have_same_dtype(a, b) && tensors_have_same_dtype(b, c)
}

/// Returns `true` if both tensors have the same memory layout.
///
/// The comparison does not depend on the shapes of the tensors: two contiguous tensors, or two channels last
/// tensors, have the same layout even if their ranks differ. Any other dim order matches only an identical one.
pub fn tensors_have_same_dim_order(a: &Tensor, b: &Tensor) -> bool {
    let (a, b) = (a.dim_order(), b.dim_order());
    (is_contiguous_dim_order(a) && is_contiguous_dim_order(b))
        || (is_channels_last_dim_order(a) && is_channels_last_dim_order(b))
        || a == b
}

/// Returns `true` if the three tensors have the same memory layout.
pub fn tensors_have_same_dim_order3(a: &Tensor, b: &Tensor, c: &Tensor) -> bool {
    tensors_have_same_dim_order(a, b) && tensors_have_same_dim_order(b, c)
}

/// Returns `true` if both tensors have the same sizes.
pub fn tensors_have_same_shape(a: &Tensor, b: &Tensor) -> bool {
    a.sizes() == b.sizes()
}

/// Returns `true` if the three tensors have the same sizes.
pub fn tensors_have_same_shape3(a: &Tensor, b: &Tensor, c: &Tensor) -> bool {
    tensors_have_same_shape(a, b) && tensors_have_same_shape(b, c)
}
