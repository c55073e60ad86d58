use crate::kernel::{fill, kernel_check, resize_tensor, scalar_to, KernelRuntimeContext};
use crate::scalar::ScalarValue;
use crate::tensor::Tensor;
use crate::KernelError;

/// Fill the output tensor with a constant, resizing it to `sizes`.
///
/// `fill_value` is converted to the element type of `out`, which must be a member of
/// [`TypeFamily::RealHBBF16`](crate::kernel::TypeFamily::RealHBBF16).
///
/// Returns `out`. Failures are recorded in `ctx`:
/// - [`KernelError::ResizeFailure`] if `out` can not be resized to `sizes`.
/// - [`KernelError::UnsupportedElementType`] if the element type of `out` is not supported.
pub fn full_out<'a>(
    ctx: &mut KernelRuntimeContext,
    sizes: &[i64],
    fill_value: &ScalarValue,
    out: &'a mut Tensor,
) -> &'a mut Tensor {
    ctx.run(out, |out| {
        let out_type = out.scalar_type();

        // Resize for dynamic shape
        kernel_check!(
            resize_tensor(out, sizes).is_ok(),
            KernelError::ResizeFailure,
            "Failed to resize output tensor."
        );

        crate::switch_realhbbf16_types!(out_type, "full.out", CTYPE_OUT => {
            let val_casted = scalar_to::<CTYPE_OUT>(fill_value);
            let data_out = out
                .as_mut_slice::<CTYPE_OUT>()
                .ok_or(KernelError::DtypeMismatch)?;
            fill(val_casted, data_out);
        })
    })
}
