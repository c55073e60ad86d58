use executorch_kernels::kernel::{
    apply_unary_map_fn, resize_tensor, scalar_to, tensors_have_same_dim_order, tensors_have_same_dtype,
    KernelRuntimeContext, TypeFamily,
};
use executorch_kernels::ops::{full_out, hardtanh_inplace, hardtanh_out};
use executorch_kernels::scalar::{bf16, f16, ScalarValue};
use executorch_kernels::tensor::{ScalarType, Tensor, TensorShapeDynamism};
use executorch_kernels::{Error, KernelError};

fn dynamic_output(scalar_type: ScalarType) -> Tensor {
    Tensor::zeros(scalar_type, &[0])
        .unwrap()
        .with_dynamism(TensorShapeDynamism::DynamicUnbound)
}

#[test]
fn full_then_hardtanh() {
    let mut ctx = KernelRuntimeContext::new();

    let mut filled = dynamic_output(ScalarType::Half);
    full_out(&mut ctx, &[2, 3], &ScalarValue::from(5), &mut filled);
    assert_eq!(ctx.failure_state(), Ok(()));

    let mut clamped = dynamic_output(ScalarType::Half);
    hardtanh_out(
        &mut ctx,
        &filled,
        &ScalarValue::from(-1.5),
        &ScalarValue::from(1.5),
        &mut clamped,
    );
    assert_eq!(ctx.failure_state(), Ok(()));
    assert_eq!(clamped.sizes(), &[2, 3]);
    assert_eq!(clamped.as_slice::<f16>().unwrap(), &[f16::from_f32(1.5); 6]);
}

#[test]
fn output_is_reused_across_shapes() {
    let mut ctx = KernelRuntimeContext::new();
    let mut out = dynamic_output(ScalarType::Long);

    for sizes in [&[4_i64][..], &[2, 2, 2], &[1], &[0, 3], &[3, 5]] {
        full_out(&mut ctx, sizes, &ScalarValue::from(-9), &mut out);
        assert_eq!(ctx.failure_state(), Ok(()));
        let numel = sizes.iter().product::<i64>() as usize;
        assert_eq!(out.numel(), numel);
        assert!(out.as_slice::<i64>().unwrap().iter().all(|&v| v == -9));
    }
    assert_eq!(out.capacity(), 15);
}

#[test]
fn bounded_output() {
    let mut ctx = KernelRuntimeContext::new();
    let mut out = Tensor::zeros(ScalarType::BFloat16, &[1, 1])
        .unwrap()
        .with_dynamism(TensorShapeDynamism::DynamicBound)
        .with_capacity(8)
        .unwrap();

    full_out(&mut ctx, &[2, 4], &ScalarValue::from(0.5), &mut out);
    assert_eq!(ctx.failure_state(), Ok(()));
    assert_eq!(out.as_slice::<bf16>().unwrap(), &[bf16::from_f32(0.5); 8]);

    full_out(&mut ctx, &[3, 3], &ScalarValue::from(0.5), &mut out);
    assert_eq!(ctx.failure(), Some(KernelError::ResizeFailure));
    assert_eq!(ctx.failure_state(), Err(Error::InvalidArgument));
}

#[test]
fn hardtanh_matches_clamp_for_every_supported_type() {
    let values = [0, 1, 3, 7, 60, 100, 127];
    for &dtype in TypeFamily::RealHBF16.members() {
        let mut ctx = KernelRuntimeContext::new();

        let mut input = dynamic_output(dtype);
        resize_tensor(&mut input, &[values.len()]).unwrap();
        // fill the input through the public dispatch and cast machinery
        executorch_kernels::switch_realhbf16_types!(dtype, "test", CTYPE => {
            let data = input.as_mut_slice::<CTYPE>().unwrap();
            for (dst, &v) in data.iter_mut().zip(&values) {
                *dst = scalar_to::<CTYPE>(&ScalarValue::from(v));
            }
        })
        .unwrap();

        let mut out = dynamic_output(dtype);
        hardtanh_out(
            &mut ctx,
            &input,
            &ScalarValue::from(2),
            &ScalarValue::from(50),
            &mut out,
        );
        assert_eq!(ctx.failure_state(), Ok(()), "{dtype}");
        assert!(tensors_have_same_dtype(&input, &out));
        assert!(tensors_have_same_dim_order(&input, &out));

        let mut expected = dynamic_output(dtype);
        resize_tensor(&mut expected, &[values.len()]).unwrap();
        executorch_kernels::switch_realhbf16_types!(dtype, "test", CTYPE => {
            let data = expected.as_mut_slice::<CTYPE>().unwrap();
            let clamped = values.map(|v| v.clamp(2, 50));
            for (dst, &v) in data.iter_mut().zip(&clamped) {
                *dst = scalar_to::<CTYPE>(&ScalarValue::from(v));
            }
        })
        .unwrap();
        assert_eq!(out.as_bytes(), expected.as_bytes(), "{dtype}");
    }
}

#[test]
fn hardtanh_inplace_aliases_input_and_output() {
    let mut ctx = KernelRuntimeContext::new();
    let mut tensor = Tensor::from_slice(&[4], &[-2.0_f64, -0.5, 0.5, 2.0]).unwrap();
    let ret = hardtanh_inplace(
        &mut ctx,
        &mut tensor,
        &ScalarValue::from(-1),
        &ScalarValue::from(1),
    );
    assert_eq!(ret.as_slice::<f64>().unwrap(), &[-1.0, -0.5, 0.5, 1.0]);
    assert_eq!(ctx.failure_state(), Ok(()));
}

#[test]
fn unary_map_on_tensor_storage() {
    let input = Tensor::from_slice(&[3], &[1_u8, 2, 3]).unwrap();
    let mut out = Tensor::zeros(ScalarType::Float, &[3]).unwrap();
    apply_unary_map_fn(
        |x: u8| f32::from(x) * 0.5,
        input.as_slice::<u8>().unwrap(),
        out.as_mut_slice::<f32>().unwrap(),
        input.numel(),
    );
    assert_eq!(out.as_slice::<f32>().unwrap(), &[0.5, 1.0, 1.5]);
}

#[test]
fn context_is_first_error_wins() {
    let mut ctx = KernelRuntimeContext::new();

    let input = Tensor::zeros(ScalarType::Float, &[2]).unwrap();
    let mut wrong_dtype = Tensor::zeros(ScalarType::Double, &[2]).unwrap();
    hardtanh_out(
        &mut ctx,
        &input,
        &ScalarValue::from(0),
        &ScalarValue::from(1),
        &mut wrong_dtype,
    );
    assert_eq!(ctx.failure(), Some(KernelError::DtypeMismatch));

    // a later valid invocation with the same context does nothing
    let mut out = dynamic_output(ScalarType::Float);
    full_out(&mut ctx, &[2], &ScalarValue::from(1), &mut out);
    assert_eq!(out.numel(), 0);
    assert_eq!(ctx.failure(), Some(KernelError::DtypeMismatch));
}

#[cfg(feature = "ndarray")]
#[test]
fn ndarray_interop() {
    let array = executorch_kernels::ndarray::arr2(&[[-3_i32, 0], [2, 7]]);
    let input = Tensor::from_array(&array).unwrap();
    let mut out = dynamic_output(ScalarType::Int);
    let mut ctx = KernelRuntimeContext::new();
    hardtanh_out(
        &mut ctx,
        &input,
        &ScalarValue::from(-1),
        &ScalarValue::from(5),
        &mut out,
    );
    assert_eq!(ctx.failure_state(), Ok(()));
    assert_eq!(
        out.as_array_dyn::<i32>().unwrap(),
        executorch_kernels::ndarray::arr2(&[[-1, 0], [2, 5]]).into_dyn()
    );
}
