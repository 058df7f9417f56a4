//! Typed, fixed-capacity inline vector.
//!
//! [`InlineVec`] keeps the header-compatible layout (an [`InlineHeader`] followed by the
//! element array) and routes every mutation through the shared view operations, so
//! it behaves exactly like any other header-compatible container.

use core::cmp::Ordering;
use core::mem::size_of;

use bytemuck::Pod;

use crate::error::{InlineVecError, Result};
use crate::header::{HeaderCompatible, InlineHeader};
use crate::view::{InlineView, InlineViewMut};

/// A fixed-capacity vector stored inline, without heap allocation.
///
/// # Type Parameters
///
/// * `T` - The element type. `Pod` so that slots can be addressed as raw bytes.
/// * `N` - The maximum number of elements (compile-time constant).
///
/// # Examples
///
/// ```rust
/// use saturn_inline_vec::InlineVec;
///
/// let mut list: InlineVec<u32, 8> = InlineVec::new();
/// list.push(1).unwrap();
/// list.push(2).unwrap();
/// list.push(3).unwrap();
///
/// list.insert(1, 99).unwrap();
/// assert_eq!(list.as_slice(), &[1, 99, 2, 3]);
///
/// assert_eq!(list.remove(0).unwrap(), 1);
/// assert_eq!(list.as_slice(), &[99, 2, 3]);
/// ```
///
/// # Memory Layout
///
/// `#[repr(C)]`: the header comes first, then `[T; N]`. The header records
/// `size_of::<T>()` as the element size and `N * size_of::<T>()` as the buffer
/// length; any trailing padding the compiler adds is not part of the declared size.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct InlineVec<T, const N: usize> {
    header: InlineHeader,
    items: [T; N],
}

impl<T: Pod, const N: usize> Default for InlineVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Pod, const N: usize> InlineVec<T, N> {
    /// Creates an empty, zero-filled vector.
    ///
    /// Panics if `T` is zero-sized.
    pub fn new() -> Self {
        assert!(size_of::<T>() > 0, "InlineVec element type must not be zero-sized");
        Self {
            header: InlineHeader::for_elements(size_of::<T>(), N),
            items: [T::zeroed(); N],
        }
    }

    /// Creates a vector from a slice, copying at most `N` elements.
    ///
    /// ```rust
    /// use saturn_inline_vec::InlineVec;
    ///
    /// let list: InlineVec<i32, 2> = InlineVec::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.as_slice(), &[1, 2]);
    /// ```
    pub fn from_slice(slice: &[T]) -> Self {
        let mut list = Self::new();
        for item in slice.iter().take(N) {
            let _ = list.push(*item);
        }
        list
    }

    /// The layout header.
    pub fn header(&self) -> &InlineHeader {
        &self.header
    }

    /// Number of populated elements.
    pub fn count(&self) -> usize {
        self.header.cursor
    }

    /// Maximum number of elements.
    pub fn max(&self) -> usize {
        self.inline_view().max()
    }

    /// Returns `true` when no element is populated.
    pub fn is_empty(&self) -> bool {
        self.header.cursor == 0
    }

    /// Returns `true` when all `N` slots are populated.
    pub fn is_full(&self) -> bool {
        self.inline_view().is_full()
    }

    /// Overwrites the cursor without any bounds check.
    ///
    /// Typed accessors never read past `N`, whatever the cursor says.
    pub fn move_cursor(&mut self, position: usize) {
        self.header.cursor = position;
    }

    /// Zeroes every slot. The cursor is left untouched; pair with
    /// `move_cursor(0)` to empty the vector.
    pub fn clear(&mut self) {
        self.inline_view_mut().clear();
    }

    /// Sorts all `N` slots in place, populated or not.
    ///
    /// ```rust
    /// use saturn_inline_vec::InlineVec;
    ///
    /// let mut list: InlineVec<u8, 4> = InlineVec::from_slice(&[3, 1, 2]);
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(list.as_slice(), &[3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_unstable_by(cmp);
    }

    /// Returns the slot at `index`, populated or not.
    ///
    /// # Errors
    ///
    /// [`InlineVecError::IndexOutOfBounds`] when `index >= N`.
    pub fn find(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or(InlineVecError::IndexOutOfBounds { index, len: N })
    }

    /// Mutable access to any of the `N` slots, populated or not.
    pub fn find_mut(&mut self, index: usize) -> Result<&mut T> {
        self.items
            .get_mut(index)
            .ok_or(InlineVecError::IndexOutOfBounds { index, len: N })
    }

    /// Returns a populated element, or `None` past the cursor.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable access to a populated element, or `None` past the cursor.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// The populated elements.
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.populated()]
    }

    /// The populated elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.populated();
        &mut self.items[..len]
    }

    /// Iterates over the populated elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.as_slice().iter()
    }

    /// Iterates mutably over the populated elements.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.as_mut_slice().iter_mut()
    }

    /// The raw bytes of all `N` slots.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.items)
    }

    /// Appends `item`.
    ///
    /// # Errors
    ///
    /// [`InlineVecError::Full`] when all `N` slots are populated.
    pub fn push(&mut self, item: T) -> Result<()> {
        self.inline_view_mut().push(bytemuck::bytes_of(&item))
    }

    /// Appends an element built from the first `size_of::<T>()` bytes of `data`.
    /// Bytes of the slot not covered by `data` keep their previous value.
    pub fn push_ext(&mut self, data: &[u8]) -> Result<()> {
        self.inline_view_mut().push_ext(data)
    }

    /// Overwrites the element at `index`, clamping `index` to the cursor.
    /// Writing at the cursor appends.
    pub fn replace(&mut self, index: usize, item: T) -> Result<()> {
        self.inline_view_mut()
            .replace(index, bytemuck::bytes_of(&item))
    }

    /// Overwrites the element at `index` with up to `size_of::<T>()` bytes of `data`,
    /// leaving the rest of the slot unmodified.
    pub fn replace_ext(&mut self, index: usize, data: &[u8]) -> Result<()> {
        self.inline_view_mut().replace_ext(index, data)
    }

    /// Inserts `item` at `index`, clamping `index` to the cursor.
    ///
    /// # Errors
    ///
    /// [`InlineVecError::Full`] when all `N` slots are populated.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.inline_view_mut()
            .insert(index, bytemuck::bytes_of(&item))
    }

    /// Inserts an element built from `data`; uncovered bytes of the slot are zeroed.
    pub fn insert_ext(&mut self, index: usize, data: &[u8]) -> Result<()> {
        self.inline_view_mut().insert_ext(index, data)
    }

    /// Removes and returns the element at `index`, clamping `index` to the last
    /// populated slot.
    ///
    /// # Errors
    ///
    /// [`InlineVecError::Empty`] when nothing is populated.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let mut removed = T::zeroed();
        self.inline_view_mut()
            .take(index, bytemuck::bytes_of_mut(&mut removed))?;
        Ok(removed)
    }

    /// Removes the last element, or returns `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        match self.populated() {
            0 => None,
            len => self.remove(len - 1).ok(),
        }
    }

    /// Raw byte-range copy from another header-compatible container.
    ///
    /// See [`InlineViewMut::copy_from`] for the clamping rules. Returns the number of
    /// bytes copied.
    pub fn copy_from<C: HeaderCompatible + ?Sized>(
        &mut self,
        src: &C,
        dst_offset: usize,
        src_offset: usize,
        length: usize,
    ) -> usize {
        let src = src.inline_view();
        self.inline_view_mut()
            .copy_from(&src, dst_offset, src_offset, length)
    }

    fn populated(&self) -> usize {
        self.header.cursor.min(N)
    }
}

impl<T: Pod, const N: usize> HeaderCompatible for InlineVec<T, N> {
    fn inline_view(&self) -> InlineView<'_> {
        InlineView::from_parts(&self.header, bytemuck::cast_slice(&self.items))
    }

    fn inline_view_mut(&mut self) -> InlineViewMut<'_> {
        InlineViewMut::from_parts(&mut self.header, bytemuck::cast_slice_mut(&mut self.items))
    }
}
