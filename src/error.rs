//! Error types used in the [`executorch_kernels`](crate) crate.

use crate::tensor::ScalarType;

/// ExecuTorch Error type.
///
/// The discriminants match the error codes of the ExecuTorch runtime, so errors can be passed to and from a
/// runtime that embeds these kernels without translation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u32)]
#[non_exhaustive]
pub enum Error {
    /* Logical errors */
    //
    /// Operation is not supported in the current context.
    NotSupported = 0x10,
    /// User provided an invalid argument.
    InvalidArgument = 0x12,
    /// Object is an invalid type for the operation.
    InvalidType = 0x13,

    /* Resource errors */
    //
    /// Could not allocate the requested memory.
    MemoryAllocationFailed = 0x21,
}
impl Error {
    /// Returns the numeric error code of the error.
    pub fn code(self) -> u32 {
        self as u32
    }
}
impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, fmt)
    }
}
#[cfg(any(error_in_core, feature = "std"))]
impl std::error::Error for Error {}

/// The reason a kernel invocation failed.
///
/// Kernels record the first failure of an invocation in the
/// [`KernelRuntimeContext`](crate::kernel::KernelRuntimeContext). At the kernel boundary all of them are
/// classified as [`Error::InvalidArgument`], see [`KernelError::error`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum KernelError {
    /// The output tensor could not be resized to the requested shape.
    ResizeFailure,
    /// The dim order of the output differs from the dim order of an input.
    DimOrderMismatch,
    /// The element type of the output differs from the element type of an input.
    DtypeMismatch,
    /// The shape of the output differs from the shape of an input.
    ShapeMismatch,
    /// The runtime element type is not in the set of types admissible by the operator.
    UnsupportedElementType {
        /// The unsupported element type.
        dtype: ScalarType,
        /// Name of the operator that rejected the type.
        op: &'static str,
    },
}
impl KernelError {
    /// The error reported at the kernel boundary for this failure.
    pub fn error(&self) -> Error {
        match self {
            KernelError::ResizeFailure
            | KernelError::DimOrderMismatch
            | KernelError::DtypeMismatch
            | KernelError::ShapeMismatch
            | KernelError::UnsupportedElementType { .. } => Error::InvalidArgument,
        }
    }
}
impl std::fmt::Display for KernelError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            KernelError::ResizeFailure => write!(fmt, "failed to resize output tensor"),
            KernelError::DimOrderMismatch => write!(fmt, "tensors do not have the same dim order"),
            KernelError::DtypeMismatch => write!(fmt, "tensors do not have the same dtype"),
            KernelError::ShapeMismatch => write!(fmt, "tensors do not have the same shape"),
            KernelError::UnsupportedElementType { dtype, op } => {
                write!(fmt, "unhandled dtype {dtype} for {op}")
            }
        }
    }
}
#[cfg(any(error_in_core, feature = "std"))]
impl std::error::Error for KernelError {}

impl From<KernelError> for Error {
    fn from(failure: KernelError) -> Self {
        failure.error()
    }
}

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
        assert_send_sync::<KernelError>();
    }

    #[test]
    fn error_codes() {
        assert_eq!(Error::NotSupported.code(), 0x10);
        assert_eq!(Error::InvalidArgument.code(), 0x12);
        assert_eq!(Error::InvalidType.code(), 0x13);
        assert_eq!(Error::MemoryAllocationFailed.code(), 0x21);
    }

    #[test]
    fn kernel_errors_are_invalid_argument() {
        let failures = [
            KernelError::ResizeFailure,
            KernelError::DimOrderMismatch,
            KernelError::DtypeMismatch,
            KernelError::ShapeMismatch,
            KernelError::UnsupportedElementType {
                dtype: ScalarType::Bool,
                op: "hardtanh.out",
            },
        ];
        for failure in failures {
            assert_eq!(failure.error(), Error::InvalidArgument);
            assert_eq!(Error::from(failure), Error::InvalidArgument);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Error::InvalidArgument.to_string(), "InvalidArgument");
        let failure = KernelError::UnsupportedElementType {
            dtype: ScalarType::Bool,
            op: "hardtanh.out",
        };
        assert_eq!(failure.to_string(), "unhandled dtype Bool for hardtanh.out");
        assert_eq!(
            KernelError::ResizeFailure.to_string(),
            "failed to resize output tensor"
        );
    }
}
