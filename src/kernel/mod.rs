//! The substrate shared by elementwise kernels.
//!
//! A kernel invocation is a linear pipeline, run within [`KernelRuntimeContext::run`]:
//! 1. The output tensor is resized to the target shape with [`resize_tensor`].
//! 2. The input and output tensors are checked for compatibility, see the predicates of this module such as
//!    [`tensors_have_same_dtype`] and [`tensors_have_same_dim_order`].
//! 3. The runtime element type is dispatched to a Rust type with one of the `switch_*` macros, e.g.
//!    [`switch_realhbf16_types`](crate::switch_realhbf16_types).
//! 4. Scalar arguments are converted to that type with [`scalar_to`], and the elements are computed with
//!    [`fill`] or [`apply_unary_map_fn`].
//!
//! The first failing step records a [`KernelError`](crate::KernelError) in the context and stops the pipeline.

mod checks;
mod context;
mod dispatch;
mod functional;
mod math;
mod resize;
mod scalar_utils;

pub use checks::*;
pub(crate) use context::kernel_check;
pub use context::KernelRuntimeContext;
pub use dispatch::{unsupported_dtype, TypeFamily};
pub use functional::{apply_unary_map_fn, apply_unary_map_fn_inplace, fill};
pub use math::{max_override, min_override, Real};
pub use resize::resize_tensor;
pub use scalar_utils::{scalar_to, ScalarCast};
