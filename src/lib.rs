#![cfg_attr(deny_warnings, deny(warnings))]
// some new clippy::lint annotations are supported in latest Rust but not recognized by older versions
#![cfg_attr(deny_warnings, allow(unknown_lints))]
#![cfg_attr(deny_warnings, deny(missing_docs))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! Portable elementwise kernels for ExecuTorch-style runtimes.
//!
//! Every elementwise operator of a portable kernel library follows the same contract: the output tensor is
//! resized to the target shape at call time, the input and output tensors are checked for structural
//! compatibility, the computation is dispatched on the runtime element type of the tensors to a concrete Rust
//! type, and finally a per-element transform (or a constant fill) is applied over the contiguous tensor storage.
//! This crate provides that substrate once, and two operators built on top of it:
//! [`full_out`](crate::ops::full_out) and [`hardtanh_out`](crate::ops::hardtanh_out).
//!
//! ```rust
//! use executorch_kernels::kernel::KernelRuntimeContext;
//! use executorch_kernels::ops::full_out;
//! use executorch_kernels::scalar::ScalarValue;
//! use executorch_kernels::tensor::{ScalarType, Tensor, TensorShapeDynamism};
//!
//! let mut out = Tensor::zeros(ScalarType::Float, &[0])
//!     .unwrap()
//!     .with_dynamism(TensorShapeDynamism::DynamicUnbound);
//!
//! let mut ctx = KernelRuntimeContext::new();
//! full_out(&mut ctx, &[2, 3], &ScalarValue::from(5), &mut out);
//! assert!(ctx.failure_state().is_ok());
//! assert_eq!(out.sizes(), &[2, 3]);
//! assert_eq!(out.as_slice::<f32>().unwrap(), &[5.0; 6]);
//! ```
//!
//! Operators never panic on invalid arguments, shapes a [`Tensor`](crate::tensor::Tensor) can not represent
//! included, and never return an error directly. Instead, the first failure
//! of an invocation is recorded in the [`KernelRuntimeContext`](crate::kernel::KernelRuntimeContext) and the
//! output tensor is returned as is. The content of the output is unspecified whenever the context indicates a
//! failure.
//!
//! ## Cargo Features
//! - `std`:
//!   Enable the standard library. This feature is enabled by default, but can be disabled to build
//!   [`executorch_kernels`](crate) in a `no_std` environment. A global allocator is always required, as tensors
//!   own their storage.
//! - `ndarray`:
//!   Views of tensors as `ndarray` arrays and construction of tensors from arrays.
//!   Adds a dependency to the `ndarray` crate.
//!   This feature is enabled by default.
//! - `num-complex`:
//!   Adds a dependency to the `num-complex` crate, which provides a fully capable complex number type.
//!   Without this feature enabled, complex numbers are available as a simple struct with two public fields without
//!   any operations. No kernel in this crate computes on complex numbers, they can only be stored in tensors.
//!
//! By default the `std` and `ndarray` features are enabled.
//!
//! ## Logging
//! Failed checks emit a single error log entry through the [`platform`] abstraction layer. The default log hook
//! discards all messages; register a [`PlatformImpl`](crate::platform::PlatformImpl) to receive them.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate core as std;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "std")]
    pub mod alloc {
        pub use std::boxed::Box;
        pub use std::format;
        pub use std::vec;
        pub use std::vec::Vec;
    }
    #[cfg(not(feature = "std"))]
    pub mod alloc {
        extern crate alloc;
        pub use alloc::boxed::Box;
        pub use alloc::format;
        pub use alloc::vec;
        pub use alloc::vec::Vec;
    }
}

#[allow(unused_imports)]
use crate::__private::alloc;

#[macro_use]
mod private;
mod log;

mod error;
pub mod kernel;
pub mod ops;
pub mod platform;
pub mod scalar;
pub mod tensor;

pub(crate) use error::Result;
pub use error::{Error, KernelError};

#[cfg(feature = "ndarray")]
pub use ndarray;

pub use half;

#[cfg(feature = "num-complex")]
pub use num_complex;
