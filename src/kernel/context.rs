use crate::tensor::Tensor;
use crate::{Error, KernelError};

/// Carrier of the first failure of a kernel invocation.
///
/// Kernels never return errors directly. Instead, the first failing check of an invocation is recorded in the
/// context, and the kernel returns its output tensor as is. Callers must consult [`failure_state`] before
/// trusting the content of the output.
///
/// A context is meant to be created by the caller per invocation. If a failed context is reused, every following
/// kernel invocation is skipped entirely and its output is left untouched.
///
/// [`failure_state`]: KernelRuntimeContext::failure_state
#[derive(Debug, Default)]
pub struct KernelRuntimeContext {
    failure: Option<KernelError>,
}
impl KernelRuntimeContext {
    /// Create a new context with no failure recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the context as failed.
    ///
    /// Only the first failure is kept, later ones are ignored.
    pub fn fail(&mut self, failure: KernelError) {
        if self.failure.is_none() {
            self.failure = Some(failure);
        }
    }

    /// Returns `Ok(())` if no failure was recorded, or the boundary error of the first failure otherwise.
    pub fn failure_state(&self) -> Result<(), Error> {
        match self.failure {
            None => Ok(()),
            Some(failure) => Err(failure.error()),
        }
    }

    /// Returns the first failure recorded in the context, if any.
    pub fn failure(&self) -> Option<KernelError> {
        self.failure
    }

    /// Returns `true` if a failure was recorded in the context.
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Run a kernel body on the output tensor and record its failure, if any.
    ///
    /// The body reports failures by returning an error, typically through [`kernel_check`] or the `?` operator,
    /// which stops the rest of the body from running. If the context has already failed the body is not invoked.
    ///
    /// Returns the output tensor that was passed in, whether the body succeeded or not.
    pub fn run<'t, F>(&mut self, out: &'t mut Tensor, body: F) -> &'t mut Tensor
    where
        F: FnOnce(&mut Tensor) -> Result<(), KernelError>,
    {
        if self.failure.is_some() {
            return out;
        }
        if let Err(failure) = body(&mut *out) {
            self.fail(failure);
        }
        out
    }
}

/// Check a condition within a kernel body, returning the given [`KernelError`] from the body if it does not hold.
///
/// A failed check emits a single error log entry, either the given message or the stringified condition.
macro_rules! kernel_check {
    ($cond:expr, $failure:expr $(,)?) => {
        if !($cond) {
            crate::log::error!("Check failed ({}): ", stringify!($cond));
            return Err($failure);
        }
    };
    ($cond:expr, $failure:expr, $($msg:tt)+) => {
        if !($cond) {
            crate::log::error!($($msg)+);
            return Err($failure);
        }
    };
}
pub(crate) use kernel_check;
