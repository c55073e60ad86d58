use ndarray::{ArrayBase, ArrayViewD, ArrayViewMutD, IxDyn, ShapeBuilder};

use super::{Scalar, SizesType, Tensor};
use crate::alloc::Vec;
use crate::{Error, Result};

impl Tensor {
    /// Get an array view of the tensor with dynamic number of dimensions.
    ///
    /// The view is indexed by the logical dimensions of the tensor, regardless of its dim order.
    ///
    /// Returns `None` if the element type of the tensor is not `S`.
    pub fn as_array_dyn<S: Scalar>(&self) -> Option<ArrayViewD<'_, S>> {
        let (sizes, strides) = self.array_shape();
        let data = self.as_slice::<S>()?;
        ArrayViewD::from_shape(IxDyn(&sizes).strides(IxDyn(&strides)), data).ok()
    }

    /// Get a mutable array view of the tensor with dynamic number of dimensions.
    ///
    /// Returns `None` if the element type of the tensor is not `S`.
    pub fn as_array_mut_dyn<S: Scalar>(&mut self) -> Option<ArrayViewMutD<'_, S>> {
        let (sizes, strides) = self.array_shape();
        let data = self.as_mut_slice::<S>()?;
        ArrayViewMutD::from_shape(IxDyn(&sizes).strides(IxDyn(&strides)), data).ok()
    }

    fn array_shape(&self) -> (Vec<usize>, Vec<usize>) {
        let sizes = self.sizes().iter().map(|&s| s as usize).collect();
        let strides = self.strides().iter().map(|&s| s as usize).collect();
        (sizes, strides)
    }

    /// Create a static, contiguous tensor holding a copy of the elements of an ndarray.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if one of the array dimensions does not fit in [`SizesType`].
    pub fn from_array<A, S, D>(array: &ArrayBase<S, D>) -> Result<Self>
    where
        A: Scalar,
        S: ndarray::Data<Elem = A>,
        D: ndarray::Dimension,
    {
        let sizes = array
            .shape()
            .iter()
            .map(|&d| SizesType::try_from(d).map_err(|_| Error::InvalidArgument))
            .collect::<Result<Vec<_>>>()?;
        let mut tensor = Tensor::zeros(A::TYPE, &sizes)?;
        let data = tensor
            .as_mut_slice::<A>()
            .ok_or(Error::InvalidArgument)?;
        for (dst, src) in data.iter_mut().zip(array.iter()) {
            *dst = *src;
        }
        Ok(tensor)
    }
}
