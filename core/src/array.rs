//! Bounds-checked views over contiguous storage.
//!
//! [`ArrayView`] is a non-owning window into caller-owned storage; every
//! indexed access goes through a mandatory bounds check that reports through
//! the [`check`](crate::check) facility on violation. [`FixedCapacityArray`]
//! owns a capacity-`N` buffer and exposes its live prefix as a view.

use crate::check_op;

/// A non-owning, bounds-checked view of contiguous storage.
///
/// The view is a mutable borrow of the backing storage plus its element
/// count; it never allocates, and it cannot outlive the storage it wraps.
/// Out-of-range access is a contract violation, not a recoverable error.
pub struct ArrayView<'a, T> {
    elems: &'a mut [T],
}

static_assertions::assert_eq_size!(ArrayView<'static, u8>, [usize; 2]);

impl<'a, T> ArrayView<'a, T> {
    /// Wraps existing storage; the view's length is the slice's length.
    pub fn new(elems: &'a mut [T]) -> Self {
        Self { elems }
    }

    /// Number of live elements covered by the view.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// Fatal if `index >= len`; the diagnostic reports both the index and
    /// the length in hex.
    pub fn at(&self, index: usize) -> &T {
        check_op!(index, <, self.len());
        &self.elems[index]
    }

    /// Mutable counterpart of [`at`](Self::at); same bounds contract.
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        check_op!(index, <, self.len());
        &mut self.elems[index]
    }

    pub fn as_slice(&self) -> &[T] {
        self.elems
    }
}

/// An owning, fixed-maximum-size buffer exposed through [`ArrayView`].
///
/// Storage is created with the container and destroyed with it; `len` counts
/// the live prefix and never exceeds `N`.
pub struct FixedCapacityArray<T, const N: usize> {
    storage: [T; N],
    len: usize,
}

impl<T: Copy + Default, const N: usize> FixedCapacityArray<T, N> {
    /// Creates an empty array (length 0, capacity `N`).
    pub fn new() -> Self {
        Self {
            storage: [T::default(); N],
            len: 0,
        }
    }
}

impl<T: Copy + Default, const N: usize> Default for FixedCapacityArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FixedCapacityArray<T, N> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// View over the live prefix (`len` elements).
    pub fn view(&mut self) -> ArrayView<'_, T> {
        ArrayView::new(&mut self.storage[..self.len])
    }
}

impl<T: Copy, const N: usize> FixedCapacityArray<T, N> {
    /// Copies `src`'s elements into the owned storage and adopts its length.
    ///
    /// Fatal if `src.len() > N`.
    pub fn assign(&mut self, src: &ArrayView<'_, T>) {
        check_op!(src.len(), <=, self.capacity());
        self.storage[..src.len()].copy_from_slice(src.as_slice());
        self.len = src.len();
    }
}
