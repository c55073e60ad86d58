use crate::kernel::{
    apply_unary_map_fn, apply_unary_map_fn_inplace, kernel_check, max_override, min_override,
    resize_tensor, scalar_to, tensors_have_same_dim_order, tensors_have_same_dtype, KernelRuntimeContext,
};
use crate::scalar::ScalarValue;
use crate::tensor::Tensor;
use crate::KernelError;

/// Clamp every element of `input` into `[min, max]`, writing the result to `out`.
///
/// `out` is resized to the sizes of `input`, and must have the same element type and dim order as `input`. The
/// element type must be a member of [`TypeFamily::RealHBF16`](crate::kernel::TypeFamily::RealHBF16). The bounds
/// are converted to the element type, and each element is computed as
/// `min_override(max_override(x, min), max)`: a NaN element stays NaN, and if `min > max` every element becomes
/// `max`.
///
/// Returns `out`. Failures are recorded in `ctx`:
/// - [`KernelError::ResizeFailure`] if `out` can not be resized to the sizes of `input`.
/// - [`KernelError::DimOrderMismatch`] if the dim orders of the tensors differ.
/// - [`KernelError::DtypeMismatch`] if the element types of the tensors differ.
/// - [`KernelError::UnsupportedElementType`] if the element type is not supported.
pub fn hardtanh_out<'a>(
    ctx: &mut KernelRuntimeContext,
    input: &Tensor,
    min: &ScalarValue,
    max: &ScalarValue,
    out: &'a mut Tensor,
) -> &'a mut Tensor {
    ctx.run(out, |out| {
        // Resize for dynamic shape
        kernel_check!(
            resize_tensor(out, input.sizes()).is_ok(),
            KernelError::ResizeFailure,
            "Failed to resize output tensor."
        );
        kernel_check!(
            tensors_have_same_dim_order(input, out),
            KernelError::DimOrderMismatch
        );
        kernel_check!(
            tensors_have_same_dtype(input, out),
            KernelError::DtypeMismatch
        );

        crate::switch_realhbf16_types!(input.scalar_type(), "hardtanh.out", CTYPE => {
            let min_casted = scalar_to::<CTYPE>(min);
            let max_casted = scalar_to::<CTYPE>(max);
            let data_in = input
                .as_slice::<CTYPE>()
                .ok_or(KernelError::DtypeMismatch)?;
            let data_out = out
                .as_mut_slice::<CTYPE>()
                .ok_or(KernelError::DtypeMismatch)?;
            apply_unary_map_fn(
                |val_in: CTYPE| min_override(max_override(val_in, min_casted), max_casted),
                data_in,
                data_out,
                input.numel(),
            );
        })
    })
}

/// Clamp every element of `tensor` into `[min, max]`, in place.
///
/// Same as [`hardtanh_out`] with the tensor being both the input and the output. No resize or compatibility
/// checks are needed, the only failure is [`KernelError::UnsupportedElementType`].
pub fn hardtanh_inplace<'a>(
    ctx: &mut KernelRuntimeContext,
    tensor: &'a mut Tensor,
    min: &ScalarValue,
    max: &ScalarValue,
) -> &'a mut Tensor {
    ctx.run(tensor, |tensor| {
        crate::switch_realhbf16_types!(tensor.scalar_type(), "hardtanh_", CTYPE => {
            let min_casted = scalar_to::<CTYPE>(min);
            let max_casted = scalar_to::<CTYPE>(max);
            let data = tensor
                .as_mut_slice::<CTYPE>()
                .ok_or(KernelError::DtypeMismatch)?;
            apply_unary_map_fn_inplace(
                |val: CTYPE| min_override(max_override(val, min_casted), max_casted),
                data,
            );
        })
    })
}
