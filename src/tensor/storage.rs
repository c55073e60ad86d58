use core::mem::{align_of, size_of};

use super::Scalar;
use crate::alloc::Vec;

type Word = u64;
const WORD_SIZE: usize = size_of::<Word>();

/// Dense, zero initialized, 8-byte aligned byte storage of a tensor.
///
/// The storage is typed only through [`Scalar`] views. Every [`Scalar`] type is valid for the all-zero bit pattern
/// and has an alignment of at most 8, and a tensor only ever writes its storage through views of its own element
/// type, so any byte within the storage is a valid part of a value of that type.
#[derive(Clone, Default)]
pub(crate) struct Storage {
    words: Vec<Word>,
}
impl Storage {
    pub(crate) fn zeroed(nbytes: usize) -> Self {
        Self {
            words: crate::alloc::vec![0; nbytes.div_ceil(WORD_SIZE)],
        }
    }

    /// The number of bytes the storage can hold.
    pub(crate) fn nbytes(&self) -> usize {
        self.words.len() * WORD_SIZE
    }

    /// Grow the storage to hold at least `nbytes` bytes, keeping the current content and zeroing the rest.
    pub(crate) fn reserve(&mut self, nbytes: usize) {
        let words = nbytes.div_ceil(WORD_SIZE);
        if words > self.words.len() {
            self.words.resize(words, 0);
        }
    }

    pub(crate) fn as_bytes(&self, nbytes: usize) -> &[u8] {
        assert!(nbytes <= self.nbytes());
        // Safety: the words are initialized and u8 has no alignment requirements
        unsafe { core::slice::from_raw_parts(self.words.as_ptr().cast::<u8>(), nbytes) }
    }

    pub(crate) fn as_slice<S: Scalar>(&self, len: usize) -> &[S] {
        assert!(align_of::<S>() <= align_of::<Word>());
        assert!(len * size_of::<S>() <= self.nbytes());
        // Safety: the pointer is aligned for S, the range is within the storage, and all bytes are valid for S
        unsafe { core::slice::from_raw_parts(self.words.as_ptr().cast::<S>(), len) }
    }

    pub(crate) fn as_mut_slice<S: Scalar>(&mut self, len: usize) -> &mut [S] {
        assert!(align_of::<S>() <= align_of::<Word>());
        assert!(len * size_of::<S>() <= self.nbytes());
        // Safety: the pointer is aligned for S, the range is within the storage, all bytes are valid for S and we
        // hold a unique reference to the storage
        unsafe { core::slice::from_raw_parts_mut(self.words.as_mut_ptr().cast::<S>(), len) }
    }
}
