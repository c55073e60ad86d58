use std::ops::{Index, IndexMut};

use super::{SizesType, StridesType};

struct Layout<const N: usize> {
    sizes: [SizesType; N],
    strides: [StridesType; N],
}
impl<const N: usize> Layout<N> {
    fn offset_of(&self, index: [usize; N]) -> Option<usize> {
        let mut offset = 0;
        for ((idx, size), stride) in index.into_iter().zip(self.sizes).zip(self.strides) {
            if idx >= size as usize {
                return None;
            }
            offset += idx * stride as usize;
        }
        Some(offset)
    }
}

/// A fast accessor for a tensor.
///
/// The accessor is a utility struct, templated over the type of the tensor elements and the number
/// of dimensions, which make it very efficient to access tensor elements by index.
/// A [`Tensor`](super::Tensor) stores its number of dimensions and its element type dynamically.
/// If you know both at compile time, you can use this accessor to access the tensor elements efficiently.
///
/// Obtain one with [`Tensor::accessor`](super::Tensor::accessor).
pub struct TensorAccessor<'a, T, const N: usize> {
    data: &'a [T],
    layout: Layout<N>,
}
impl<'a, T, const N: usize> TensorAccessor<'a, T, N> {
    pub(crate) fn new(data: &'a [T], sizes: [SizesType; N], strides: [StridesType; N]) -> Self {
        Self {
            data,
            layout: Layout { sizes, strides },
        }
    }

    /// Get a reference to the tensor element at the given index.
    ///
    /// Returns the element at the given index, or `None` if the index is out of bounds.
    pub fn get(&self, index: [usize; N]) -> Option<&'a T> {
        self.data.get(self.layout.offset_of(index)?)
    }
}
impl<T> Index<usize> for TensorAccessor<'_, T, 1> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.get([index]).expect("index out of bounds")
    }
}
impl<T, const N: usize> Index<[usize; N]> for TensorAccessor<'_, T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: [usize; N]) -> &Self::Output {
        self.get(index).expect("index out of bounds")
    }
}

/// A mutable accessor for a tensor.
///
/// This is similar to [TensorAccessor], but allows for mutable access to the tensor elements.
/// See the immutable accessor for more details.
pub struct TensorAccessorMut<'a, T, const N: usize> {
    data: &'a mut [T],
    layout: Layout<N>,
}
impl<'a, T, const N: usize> TensorAccessorMut<'a, T, N> {
    pub(crate) fn new(data: &'a mut [T], sizes: [SizesType; N], strides: [StridesType; N]) -> Self {
        Self {
            data,
            layout: Layout { sizes, strides },
        }
    }

    /// Get a reference to the tensor element at the given index.
    ///
    /// Returns the element at the given index, or `None` if the index is out of bounds.
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        self.data.get(self.layout.offset_of(index)?)
    }

    /// Get a mutable reference to the tensor element at the given index.
    ///
    /// Returns the element at the given index, or `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: [usize; N]) -> Option<&mut T> {
        let offset = self.layout.offset_of(index)?;
        self.data.get_mut(offset)
    }
}
impl<T> Index<usize> for TensorAccessorMut<'_, T, 1> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.get([index]).expect("index out of bounds")
    }
}
impl<T, const N: usize> Index<[usize; N]> for TensorAccessorMut<'_, T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: [usize; N]) -> &Self::Output {
        self.get(index).expect("index out of bounds")
    }
}
impl<T> IndexMut<usize> for TensorAccessorMut<'_, T, 1> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut([index]).expect("index out of bounds")
    }
}
impl<T, const N: usize> IndexMut<[usize; N]> for TensorAccessorMut<'_, T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: [usize; N]) -> &mut Self::Output {
        self.get_mut(index).expect("index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strided_access() {
        // a 2x3 tensor stored column major
        let data = [0, 3, 1, 4, 2, 5];
        let accessor = TensorAccessor::new(&data[..], [2, 3], [1, 2]);
        assert_eq!(accessor[[0, 2]], 2);
        assert_eq!(accessor[[1, 0]], 3);
        assert_eq!(accessor.get([0, 3]), None);
    }

    #[test]
    fn one_dim_indexing() {
        let mut data = [1.0_f32, 2.0, 3.0];
        let mut accessor = TensorAccessorMut::new(&mut data[..], [3], [1]);
        accessor[1] *= 10.0;
        assert_eq!(accessor[1], 20.0);
        assert_eq!(accessor.get_mut([3]), None);
        assert_eq!(data, [1.0, 20.0, 3.0]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_panics() {
        let data = [1_i8];
        let accessor = TensorAccessor::new(&data[..], [1], [1]);
        let _ = accessor[1];
    }
}
