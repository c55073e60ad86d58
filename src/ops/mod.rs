//! Operators built on the [`kernel`](crate::kernel) substrate.
//!
//! Every operator takes a [`KernelRuntimeContext`](crate::kernel::KernelRuntimeContext), its inputs and a mutable
//! output tensor, and returns a reference to that same output. Whether the invocation succeeded is only known
//! through the context.

mod full;
mod hardtanh;

pub use full::full_out;
pub use hardtanh::{hardtanh_inplace, hardtanh_out};
