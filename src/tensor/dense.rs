use super::layout::dim_order_to_strides;
use super::storage::Storage;
use super::{
    DimOrderType, Scalar, ScalarType, SizesType, StridesType, TensorAccessor, TensorAccessorMut,
    TensorShapeDynamism, TENSOR_DIMENSION_LIMIT,
};
use crate::alloc::Vec;
use crate::{Error, Result};

/// A dense tensor that owns its storage.
///
/// A tensor is described by its element type ([`ScalarType`]), its sizes, its dim order and its
/// [`TensorShapeDynamism`]. The element type is fixed for the lifetime of the tensor, while the sizes may change
/// through [`set_sizes`](Tensor::set_sizes) according to the shape dynamism.
///
/// The storage always holds exactly [`numel`](Tensor::numel) live elements laid out densely according to the dim
/// order, and possibly additional reserved capacity. The elements are accessed through typed views such as
/// [`as_slice`](Tensor::as_slice), which are available only for the Rust type matching the element type.
#[derive(Clone)]
pub struct Tensor {
    scalar_type: ScalarType,
    sizes: Vec<SizesType>,
    dim_order: Vec<DimOrderType>,
    strides: Vec<StridesType>,
    numel: usize,
    numel_bound: usize,
    dynamism: TensorShapeDynamism,
    storage: Storage,
}
impl Tensor {
    /// Create a new static tensor filled with zeros, with a contiguous dim order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if any of the sizes is negative, if the rank exceeds
    /// [`TENSOR_DIMENSION_LIMIT`] or if a stride overflows [`StridesType`], and [`Error::MemoryAllocationFailed`]
    /// if the size of the tensor in bytes overflows `usize`.
    pub fn zeros(scalar_type: ScalarType, sizes: &[SizesType]) -> Result<Self> {
        let numel = compute_numel(sizes)?;
        let nbytes = compute_nbytes(numel, scalar_type)?;
        let dim_order = contiguous_dim_order(sizes.len());
        Ok(Self {
            scalar_type,
            strides: dim_order_to_strides(sizes, &dim_order)?,
            sizes: sizes.to_vec(),
            dim_order,
            numel,
            numel_bound: numel,
            dynamism: TensorShapeDynamism::Static,
            storage: Storage::zeroed(nbytes),
        })
    }

    /// Create a new static tensor with the given sizes, holding a copy of `data` in row major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if any of the sizes is negative or if the length of `data` does not match
    /// the number of elements of the sizes.
    pub fn from_slice<S: Scalar>(sizes: &[SizesType], data: &[S]) -> Result<Self> {
        let mut tensor = Self::zeros(S::TYPE, sizes)?;
        if data.len() != tensor.numel {
            return Err(Error::InvalidArgument);
        }
        tensor.storage.as_mut_slice::<S>(data.len()).copy_from_slice(data);
        Ok(tensor)
    }

    /// Relabel the dim order of the tensor, recomputing its strides.
    ///
    /// The storage is not touched, the existing elements are reinterpreted according to the new dim order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `dim_order` is not a permutation of `0..self.dim()`.
    pub fn with_dim_order(mut self, dim_order: &[DimOrderType]) -> Result<Self> {
        self.strides = dim_order_to_strides(&self.sizes, dim_order)?;
        self.dim_order = dim_order.to_vec();
        Ok(self)
    }

    /// Set the shape dynamism of the tensor.
    pub fn with_dynamism(mut self, dynamism: TensorShapeDynamism) -> Self {
        self.dynamism = dynamism;
        self
    }

    /// Reserve storage for at least `numel_bound` elements.
    ///
    /// For a [`TensorShapeDynamism::DynamicBound`] tensor this is the maximal number of elements it can be resized
    /// to. The capacity never shrinks below the current one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MemoryAllocationFailed`] if the requested capacity in bytes overflows `usize`.
    pub fn with_capacity(mut self, numel_bound: usize) -> Result<Self> {
        if numel_bound > self.numel_bound {
            let nbytes = compute_nbytes(numel_bound, self.scalar_type)?;
            self.storage.reserve(nbytes);
            self.numel_bound = numel_bound;
        }
        Ok(self)
    }

    /// Returns the type of the elements in the tensor (int32, float, bool, etc).
    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    /// Returns the size in bytes of one element of the tensor.
    pub fn element_size(&self) -> usize {
        self.scalar_type.element_size()
    }

    /// Returns the sizes of the tensor at each dimension.
    pub fn sizes(&self) -> &[SizesType] {
        &self.sizes
    }

    /// Returns the size of the tensor at the given dimension.
    ///
    /// # Panics
    ///
    /// If `dim` is out of bounds.
    pub fn size(&self, dim: usize) -> usize {
        self.sizes[dim] as usize
    }

    /// Returns the tensor's number of dimensions.
    pub fn dim(&self) -> usize {
        self.sizes.len()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.numel
    }

    /// Returns the maximal number of elements the tensor can hold without growing its storage.
    pub fn capacity(&self) -> usize {
        self.numel_bound
    }

    /// Returns the size of the tensor in bytes.
    ///
    /// NOTE: Only the alive space is returned not the total capacity of the
    /// underlying data blob.
    pub fn nbytes(&self) -> usize {
        self.numel * self.element_size()
    }

    /// Returns the order the dimensions are laid out in memory.
    pub fn dim_order(&self) -> &[DimOrderType] {
        &self.dim_order
    }

    /// Returns the strides of the tensor at each dimension.
    ///
    /// Strides are in units of the elements size, not in bytes.
    pub fn strides(&self) -> &[StridesType] {
        &self.strides
    }

    /// Returns the shape dynamism of the tensor.
    pub fn shape_dynamism(&self) -> TensorShapeDynamism {
        self.dynamism
    }

    /// Returns the live elements of the tensor as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_bytes(self.nbytes())
    }

    /// Returns the live elements of the tensor in storage order, or `None` if the element type of the tensor is
    /// not `S`.
    pub fn as_slice<S: Scalar>(&self) -> Option<&[S]> {
        (self.scalar_type == S::TYPE).then(|| self.storage.as_slice::<S>(self.numel))
    }

    /// Returns the live elements of the tensor in storage order, or `None` if the element type of the tensor is
    /// not `S`.
    pub fn as_mut_slice<S: Scalar>(&mut self) -> Option<&mut [S]> {
        if self.scalar_type != S::TYPE {
            return None;
        }
        Some(self.storage.as_mut_slice::<S>(self.numel))
    }

    /// Get a reference to the element at `index`, or `None` if the element type of the tensor is not `S` or the
    /// index is out of bounds.
    pub fn get<S: Scalar>(&self, index: &[usize]) -> Option<&S> {
        let offset = self.offset_of(index)?;
        self.as_slice::<S>()?.get(offset)
    }

    /// Get a mutable reference to the element at `index`, or `None` if the element type of the tensor is not `S`
    /// or the index is out of bounds.
    pub fn get_mut<S: Scalar>(&mut self, index: &[usize]) -> Option<&mut S> {
        let offset = self.offset_of(index)?;
        self.as_mut_slice::<S>()?.get_mut(offset)
    }

    fn offset_of(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.dim() {
            return None;
        }
        let mut offset = 0;
        for ((&idx, &size), &stride) in index.iter().zip(&self.sizes).zip(&self.strides) {
            if idx >= size as usize {
                return None;
            }
            offset += idx * stride as usize;
        }
        Some(offset)
    }

    /// Get an immutable accessor for the tensor.
    ///
    /// An accessor is a utility struct, templated over the type of the tensor elements and the number
    /// of dimensions, which make it very efficient to access tensor elements by index.
    /// See the [`TensorAccessor`] for more details.
    ///
    /// # Returns
    ///
    /// Returns an accessor if the scalar type of the tensor matches `S` and the number of dimensions
    /// matches `N`, otherwise returns `None`.
    pub fn accessor<S: Scalar, const N: usize>(&self) -> Option<TensorAccessor<'_, S, N>> {
        let sizes = self.sizes.as_slice().try_into().ok()?;
        let strides = self.strides.as_slice().try_into().ok()?;
        let data = self.as_slice::<S>()?;
        Some(TensorAccessor::new(data, sizes, strides))
    }

    /// Get a mutable accessor for the tensor.
    ///
    /// See [`accessor`](Tensor::accessor) for more details.
    pub fn accessor_mut<S: Scalar, const N: usize>(&mut self) -> Option<TensorAccessorMut<'_, S, N>> {
        let sizes = self.sizes.as_slice().try_into().ok()?;
        let strides = self.strides.as_slice().try_into().ok()?;
        let data = self.as_mut_slice::<S>()?;
        Some(TensorAccessorMut::new(data, sizes, strides))
    }

    /// Change the sizes of the tensor, according to its shape dynamism.
    ///
    /// - A [`Static`](TensorShapeDynamism::Static) tensor accepts only its current sizes.
    /// - A [`DynamicBound`](TensorShapeDynamism::DynamicBound) tensor accepts sizes of the same rank whose number of
    ///   elements does not exceed its [`capacity`](Tensor::capacity).
    /// - A [`DynamicUnbound`](TensorShapeDynamism::DynamicUnbound) tensor accepts any sizes, growing its storage as
    ///   needed.
    ///
    /// If the rank is unchanged the dim order is kept, otherwise it is reset to the contiguous one. The strides are
    /// recomputed in both cases. The values of the elements after a shape change are unspecified.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if any of the new sizes is negative, if the new rank exceeds
    ///   [`TENSOR_DIMENSION_LIMIT`] or if a new stride overflows [`StridesType`].
    /// - [`Error::NotSupported`] if the shape dynamism of the tensor does not allow the new sizes.
    /// - [`Error::MemoryAllocationFailed`] if the new size in bytes overflows `usize`.
    ///
    /// On error the tensor is left unchanged.
    pub fn set_sizes(&mut self, new_sizes: &[SizesType]) -> Result<()> {
        let new_numel = compute_numel(new_sizes)?;
        if new_sizes == self.sizes.as_slice() {
            return Ok(());
        }
        match self.dynamism {
            TensorShapeDynamism::Static => return Err(Error::NotSupported),
            TensorShapeDynamism::DynamicBound => {
                if new_sizes.len() != self.dim() || new_numel > self.numel_bound {
                    return Err(Error::NotSupported);
                }
            }
            TensorShapeDynamism::DynamicUnbound => {}
        }

        let new_dim_order = if new_sizes.len() == self.dim() {
            None
        } else {
            Some(contiguous_dim_order(new_sizes.len()))
        };
        let new_strides = dim_order_to_strides(
            new_sizes,
            new_dim_order.as_deref().unwrap_or(self.dim_order.as_slice()),
        )?;

        if new_numel > self.numel_bound {
            // only an unbound tensor gets here with more elements than its capacity
            let nbytes = compute_nbytes(new_numel, self.scalar_type)?;
            crate::log::debug!(
                "Growing tensor storage from {} to {} bytes",
                self.storage.nbytes(),
                nbytes
            );
            self.storage.reserve(nbytes);
            self.numel_bound = new_numel;
        }

        if let Some(dim_order) = new_dim_order {
            self.dim_order = dim_order;
        }
        self.sizes.clear();
        self.sizes.extend_from_slice(new_sizes);
        self.strides = new_strides;
        self.numel = new_numel;
        Ok(())
    }
}

fn contiguous_dim_order(ndim: usize) -> Vec<DimOrderType> {
    debug_assert!(ndim <= TENSOR_DIMENSION_LIMIT);
    (0..ndim as DimOrderType).collect()
}

fn compute_numel(sizes: &[SizesType]) -> Result<usize> {
    if sizes.len() > TENSOR_DIMENSION_LIMIT {
        return Err(Error::InvalidArgument);
    }
    sizes.iter().try_fold(1_usize, |numel, &size| {
        let size = usize::try_from(size).map_err(|_| Error::InvalidArgument)?;
        numel.checked_mul(size).ok_or(Error::MemoryAllocationFailed)
    })
}

fn compute_nbytes(numel: usize, scalar_type: ScalarType) -> Result<usize> {
    numel
        .checked_mul(scalar_type.element_size())
        .ok_or(Error::MemoryAllocationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{bf16, Complex};

    #[test]
    fn zeros() {
        let tensor = Tensor::zeros(ScalarType::Float, &[2, 3]).unwrap();
        assert_eq!(tensor.scalar_type(), ScalarType::Float);
        assert_eq!(tensor.sizes(), &[2, 3]);
        assert_eq!(tensor.dim(), 2);
        assert_eq!(tensor.size(1), 3);
        assert_eq!(tensor.numel(), 6);
        assert_eq!(tensor.nbytes(), 24);
        assert_eq!(tensor.element_size(), 4);
        assert_eq!(tensor.dim_order(), &[0, 1]);
        assert_eq!(tensor.strides(), &[3, 1]);
        assert_eq!(tensor.capacity(), 6);
        assert_eq!(tensor.shape_dynamism(), TensorShapeDynamism::Static);
        assert_eq!(tensor.as_slice::<f32>().unwrap(), &[0.0; 6]);
        assert_eq!(tensor.as_bytes().len(), 24);
    }

    #[test]
    fn zero_dim_and_empty() {
        let scalar = Tensor::zeros(ScalarType::Long, &[]).unwrap();
        assert_eq!(scalar.numel(), 1);
        assert_eq!(scalar.get::<i64>(&[]), Some(&0));

        let empty = Tensor::zeros(ScalarType::Long, &[3, 0]).unwrap();
        assert_eq!(empty.numel(), 0);
        assert!(empty.as_slice::<i64>().unwrap().is_empty());
    }

    #[test]
    fn invalid_sizes() {
        assert_eq!(
            Tensor::zeros(ScalarType::Float, &[2, -1]).err(),
            Some(Error::InvalidArgument)
        );
        assert_eq!(
            Tensor::zeros(ScalarType::Double, &[i32::MAX, i32::MAX, i32::MAX, i32::MAX]).err(),
            Some(Error::MemoryAllocationFailed)
        );
        assert_eq!(
            Tensor::zeros(ScalarType::Float, &[1; TENSOR_DIMENSION_LIMIT + 1]).err(),
            Some(Error::InvalidArgument)
        );
        assert_eq!(
            Tensor::zeros(ScalarType::Float, &[1; 256]).err(),
            Some(Error::InvalidArgument)
        );
        // no elements, but the outermost stride does not fit in `StridesType`
        assert_eq!(
            Tensor::zeros(ScalarType::Float, &[2, 65536, 65536, 0]).err(),
            Some(Error::InvalidArgument)
        );
        assert!(Tensor::zeros(ScalarType::Float, &[1; TENSOR_DIMENSION_LIMIT]).is_ok());
    }

    #[test]
    fn from_slice() {
        let tensor = Tensor::from_slice(&[2, 2], &[1_i32, 2, 3, 4]).unwrap();
        assert_eq!(tensor.scalar_type(), ScalarType::Int);
        assert_eq!(tensor.get::<i32>(&[1, 0]), Some(&3));
        assert_eq!(tensor.get::<i32>(&[2, 0]), None);
        assert_eq!(tensor.get::<i32>(&[1]), None);
        assert_eq!(tensor.get::<i64>(&[1, 0]), None);

        assert_eq!(
            Tensor::from_slice(&[2, 2], &[1_i32, 2, 3]).err(),
            Some(Error::InvalidArgument)
        );

        let complex = Tensor::from_slice(&[1], &[Complex { re: 1.0_f32, im: 2.0 }]).unwrap();
        assert_eq!(complex.scalar_type(), ScalarType::ComplexFloat);
        let bf = Tensor::from_slice(&[1], &[bf16::from_f32(1.5)]).unwrap();
        assert_eq!(bf.as_slice::<bf16>().unwrap()[0].to_f32(), 1.5);
    }

    #[test]
    fn typed_views_check_the_element_type() {
        let mut tensor = Tensor::zeros(ScalarType::Bool, &[4]).unwrap();
        assert!(tensor.as_slice::<u8>().is_none());
        assert!(tensor.as_mut_slice::<u8>().is_none());
        tensor.as_mut_slice::<bool>().unwrap()[2] = true;
        *tensor.get_mut::<bool>(&[0]).unwrap() = true;
        assert_eq!(
            tensor.as_slice::<bool>().unwrap(),
            &[true, false, true, false]
        );
        assert_eq!(tensor.as_bytes(), &[1, 0, 1, 0]);
    }

    #[test]
    fn dim_order() {
        // NCHW sizes laid out as NHWC
        let data = (0..24).collect::<Vec<i32>>();
        let tensor = Tensor::from_slice(&[1, 2, 3, 4], &data)
            .unwrap()
            .with_dim_order(&[0, 2, 3, 1])
            .unwrap();
        assert_eq!(tensor.strides(), &[24, 1, 8, 2]);
        // element (n=0, c=1, h=2, w=3) lives at offset 1 + 16 + 6
        assert_eq!(tensor.get::<i32>(&[0, 1, 2, 3]), Some(&23));
        assert_eq!(tensor.get::<i32>(&[0, 1, 0, 0]), Some(&1));

        let err = Tensor::zeros(ScalarType::Int, &[2, 2])
            .unwrap()
            .with_dim_order(&[1, 1]);
        assert_eq!(err.err(), Some(Error::InvalidArgument));
    }

    #[test]
    fn resize_static() {
        let mut tensor = Tensor::zeros(ScalarType::Float, &[2, 3]).unwrap();
        assert_eq!(tensor.set_sizes(&[2, 3]), Ok(()));
        assert_eq!(tensor.set_sizes(&[3, 2]), Err(Error::NotSupported));
        assert_eq!(tensor.set_sizes(&[1, 1]), Err(Error::NotSupported));
        assert_eq!(tensor.sizes(), &[2, 3]);
    }

    #[test]
    fn resize_dynamic_bound() {
        let mut tensor = Tensor::zeros(ScalarType::Float, &[1, 1])
            .unwrap()
            .with_dynamism(TensorShapeDynamism::DynamicBound)
            .with_capacity(6)
            .unwrap();
        assert_eq!(tensor.capacity(), 6);

        assert_eq!(tensor.set_sizes(&[2, 3]), Ok(()));
        assert_eq!(tensor.numel(), 6);
        assert_eq!(tensor.strides(), &[3, 1]);
        assert_eq!(tensor.as_slice::<f32>().unwrap().len(), 6);

        assert_eq!(tensor.set_sizes(&[1, 2]), Ok(()));
        assert_eq!(tensor.numel(), 2);

        // exceeds the capacity
        assert_eq!(tensor.set_sizes(&[3, 3]), Err(Error::NotSupported));
        // rank change
        assert_eq!(tensor.set_sizes(&[2]), Err(Error::NotSupported));
        // negative dimension
        assert_eq!(tensor.set_sizes(&[-1, 2]), Err(Error::InvalidArgument));
        assert_eq!(tensor.sizes(), &[1, 2]);
    }

    #[test]
    fn resize_dynamic_unbound() {
        let mut tensor = Tensor::zeros(ScalarType::Short, &[1])
            .unwrap()
            .with_dynamism(TensorShapeDynamism::DynamicUnbound);
        assert_eq!(tensor.set_sizes(&[4, 5, 6]), Ok(()));
        assert_eq!(tensor.numel(), 120);
        assert_eq!(tensor.capacity(), 120);
        assert_eq!(tensor.dim_order(), &[0, 1, 2]);
        assert_eq!(tensor.strides(), &[30, 6, 1]);

        assert_eq!(tensor.set_sizes(&[0]), Ok(()));
        assert_eq!(tensor.numel(), 0);
        assert_eq!(tensor.capacity(), 120);
    }

    #[test]
    fn resize_rejects_unrepresentable_shapes() {
        let mut tensor = Tensor::zeros(ScalarType::Float, &[2, 2])
            .unwrap()
            .with_dynamism(TensorShapeDynamism::DynamicUnbound);
        assert_eq!(
            tensor.set_sizes(&[1; TENSOR_DIMENSION_LIMIT + 1]),
            Err(Error::InvalidArgument)
        );
        assert_eq!(tensor.set_sizes(&[1; 256]), Err(Error::InvalidArgument));
        assert_eq!(
            tensor.set_sizes(&[2, 65536, 65536, 0]),
            Err(Error::InvalidArgument)
        );
        assert_eq!(tensor.sizes(), &[2, 2]);
        assert_eq!(tensor.dim_order(), &[0, 1]);
        assert_eq!(tensor.strides(), &[2, 1]);
        assert_eq!(tensor.capacity(), 4);

        assert_eq!(tensor.set_sizes(&[1; TENSOR_DIMENSION_LIMIT]), Ok(()));
        assert_eq!(tensor.dim(), TENSOR_DIMENSION_LIMIT);
        assert_eq!(tensor.numel(), 1);
    }

    #[test]
    fn resize_keeps_dim_order_of_same_rank() {
        let mut tensor = Tensor::zeros(ScalarType::Float, &[1, 2, 3, 4])
            .unwrap()
            .with_dim_order(&[0, 2, 3, 1])
            .unwrap()
            .with_dynamism(TensorShapeDynamism::DynamicUnbound);
        tensor.set_sizes(&[2, 3, 4, 5]).unwrap();
        assert_eq!(tensor.dim_order(), &[0, 2, 3, 1]);
        assert_eq!(tensor.strides(), &[60, 1, 15, 3]);

        tensor.set_sizes(&[6]).unwrap();
        assert_eq!(tensor.dim_order(), &[0]);
    }

    #[test]
    fn accessors() {
        let mut tensor = Tensor::from_slice(&[2, 3], &[0_u8, 1, 2, 3, 4, 5]).unwrap();
        {
            let accessor = tensor.accessor::<u8, 2>().unwrap();
            assert_eq!(accessor[[1, 2]], 5);
            assert_eq!(accessor.get([2, 0]), None);
        }
        assert!(tensor.accessor::<u8, 3>().is_none());
        assert!(tensor.accessor::<i8, 2>().is_none());

        let mut accessor = tensor.accessor_mut::<u8, 2>().unwrap();
        accessor[[0, 1]] = 42;
        assert_eq!(tensor.as_slice::<u8>().unwrap(), &[0, 42, 2, 3, 4, 5]);
    }
}
