//! The layout contract shared by every inline container.
//!
//! A container is *header-compatible* when it places an [`InlineHeader`] first and its
//! inline element buffer immediately after it. Every shared operation in
//! [`crate::view`] works on that shape alone, so one implementation serves all element
//! types and capacities.

use bytemuck::{Pod, Zeroable};

use crate::view::{InlineView, InlineViewMut};

/// Byte size of the [`InlineHeader`] prefix.
pub const HEADER_SIZE: usize = core::mem::size_of::<InlineHeader>();

/// Canonical header placed at the start of every inline container.
///
/// # Memory Layout
///
/// Four native size words in this exact order, followed by the inline buffer:
///
/// | field           | meaning                                         |
/// |-----------------|-------------------------------------------------|
/// | `total_size`    | declared byte size of header plus buffer        |
/// | `element_size`  | byte size of one element                        |
/// | `buffer_length` | usable buffer bytes (`total_size - HEADER_SIZE`) |
/// | `cursor`        | populated element count, next free slot         |
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct InlineHeader {
    pub total_size: usize,
    pub element_size: usize,
    pub buffer_length: usize,
    pub cursor: usize,
}

const _: () = {
    use core::mem::{align_of, size_of};

    const _EXPECTED_SIZE: usize = size_of::<usize>() * 4;
    const _: () = assert!(HEADER_SIZE == _EXPECTED_SIZE, "Size mismatch in InlineHeader!");
    const _: () = assert!(align_of::<InlineHeader>() == align_of::<usize>());
};

impl InlineHeader {
    /// Builds the header for a container whose whole declared size is `total_size`.
    ///
    /// The cursor starts at zero.
    pub const fn new(total_size: usize, element_size: usize) -> Self {
        Self {
            total_size,
            element_size,
            buffer_length: total_size.saturating_sub(HEADER_SIZE),
            cursor: 0,
        }
    }

    /// Builds the header for a buffer holding exactly `capacity` elements.
    ///
    /// ```rust
    /// use saturn_inline_vec::{InlineHeader, HEADER_SIZE};
    ///
    /// let header = InlineHeader::for_elements(4, 8);
    /// assert_eq!(header.buffer_length, 32);
    /// assert_eq!(header.total_size, HEADER_SIZE + 32);
    /// ```
    pub const fn for_elements(element_size: usize, capacity: usize) -> Self {
        let buffer_length = element_size * capacity;
        Self {
            total_size: HEADER_SIZE + buffer_length,
            element_size,
            buffer_length,
            cursor: 0,
        }
    }
}

/// A concrete container laid out as an [`InlineHeader`] followed by its inline buffer.
///
/// Implementors hand out the canonical views; all shared operations then act on the
/// header and buffer through those views, regardless of the implementor's element
/// type or capacity.
///
/// # Examples
///
/// ```rust
/// use saturn_inline_vec::{HeaderCompatible, InlineVec};
///
/// fn fill_with_ones(container: &mut impl HeaderCompatible) -> usize {
///     let mut view = container.inline_view_mut();
///     let width = view.header().element_size;
///     let one = [1u8; 16];
///     while view.push_ext(&one[..width]).is_ok() {}
///     view.count()
/// }
///
/// let mut small: InlineVec<u16, 3> = InlineVec::new();
/// let mut large: InlineVec<u32, 5> = InlineVec::new();
/// assert_eq!(fill_with_ones(&mut small), 3);
/// assert_eq!(fill_with_ones(&mut large), 5);
/// assert_eq!(small.as_slice(), &[0x0101; 3]);
/// ```
pub trait HeaderCompatible {
    /// Returns a read-only canonical view over this container.
    fn inline_view(&self) -> InlineView<'_>;

    /// Returns a mutable canonical view over this container.
    fn inline_view_mut(&mut self) -> InlineViewMut<'_>;
}
