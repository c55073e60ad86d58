use crate::alloc::Vec;
use crate::tensor::{SizesType, Tensor};
use crate::{Error, Result};

/// Resize a tensor to the given sizes.
///
/// The sizes may be given in any integer type, e.g. the `i64` sizes kernels receive as arguments or the
/// [`SizesType`] sizes of another tensor. Whether the resize is allowed depends on the
/// [shape dynamism](crate::tensor::TensorShapeDynamism) of the tensor, see [`Tensor::set_sizes`]. The element values
/// of the tensor after a shape change are unspecified.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a size is negative or does not fit in [`SizesType`], or if the tensor can
/// not be resized to the requested sizes. The reason is logged at the debug level.
pub fn resize_tensor<I>(tensor: &mut Tensor, new_sizes: &[I]) -> Result<()>
where
    I: Copy + TryInto<SizesType>,
{
    let new_sizes = new_sizes
        .iter()
        .map(|&size| size.try_into().map_err(|_| Error::InvalidArgument))
        .collect::<Result<Vec<SizesType>>>()?;
    tensor.set_sizes(&new_sizes).map_err(|err| {
        crate::log::debug!(
            "Failed to resize tensor of sizes {:?} to {:?}: {}",
            tensor.sizes(),
            new_sizes,
            err
        );
        Error::InvalidArgument
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::{ScalarType, TensorShapeDynamism};

    #[test]
    fn resize_static() {
        let mut tensor = Tensor::zeros(ScalarType::Float, &[2, 3]).unwrap();
        assert_eq!(resize_tensor(&mut tensor, &[2_i64, 3]), Ok(()));
        assert_eq!(
            resize_tensor(&mut tensor, &[3_i64, 2]),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn resize_bound_exceeds_capacity() {
        let mut tensor = Tensor::zeros(ScalarType::Float, &[2, 2])
            .unwrap()
            .with_dynamism(TensorShapeDynamism::DynamicBound);
        assert_eq!(resize_tensor(&mut tensor, &[1_i32, 3]), Ok(()));
        assert_eq!(tensor.numel(), 3);
        assert_eq!(
            resize_tensor(&mut tensor, &[3_i32, 3]),
            Err(Error::InvalidArgument)
        );
        assert_eq!(tensor.sizes(), &[1, 3]);
    }

    #[test]
    fn invalid_sizes() {
        let mut tensor = Tensor::zeros(ScalarType::Float, &[1])
            .unwrap()
            .with_dynamism(TensorShapeDynamism::DynamicUnbound);
        assert_eq!(
            resize_tensor(&mut tensor, &[-1_i64]),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            resize_tensor(&mut tensor, &[i64::from(i32::MAX) + 1]),
            Err(Error::InvalidArgument)
        );
        assert_eq!(resize_tensor(&mut tensor, &[4_i64, 0]), Ok(()));
        assert_eq!(tensor.numel(), 0);
    }
}
