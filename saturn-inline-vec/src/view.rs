//! Canonical views over header-compatible storage and the shared operation set.
//!
//! [`InlineView`] and [`InlineViewMut`] pair a borrowed [`InlineHeader`] with the inline
//! buffer that follows it. Every operation reads the element width and the buffer
//! length from the header at runtime, which is what lets one implementation serve
//! containers of any element type and capacity.
//!
//! Only the first `min(buffer_length, physical buffer length)` bytes are ever touched,
//! so a corrupted header can produce wrong answers but never an out-of-bounds access.

use core::cmp::Ordering;
use core::ops::Range;

use tracing::debug;

use crate::error::{InlineVecError, Result};
use crate::header::{InlineHeader, HEADER_SIZE};
use crate::ordering::sort_chunks_by;
use crate::policy::IndexPolicy;

/// Read-only canonical view.
#[derive(Clone, Copy, Debug)]
pub struct InlineView<'a> {
    header: &'a InlineHeader,
    buffer: &'a [u8],
}

impl<'a> InlineView<'a> {
    /// Pairs a header with the physical buffer that follows it.
    pub fn from_parts(header: &'a InlineHeader, buffer: &'a [u8]) -> Self {
        Self { header, buffer }
    }

    /// Reinterprets raw storage as header-plus-buffer.
    ///
    /// # Errors
    ///
    /// Fails when the storage is too short or misaligned for the header, when the
    /// header declares more bytes than `storage` holds, or when the element size is
    /// zero.
    pub fn from_storage(storage: &'a [u8]) -> Result<Self> {
        check_storage_len(storage.len())?;
        let (head, buffer) = storage.split_at(HEADER_SIZE);
        let header: &InlineHeader =
            bytemuck::try_from_bytes(head).map_err(|_| InlineVecError::Misaligned)?;
        validate_header(header, storage.len())?;
        Ok(Self::from_parts(header, buffer))
    }

    /// The borrowed header.
    pub fn header(&self) -> &'a InlineHeader {
        self.header
    }

    /// Number of logically populated elements, i.e. the cursor.
    pub fn count(&self) -> usize {
        self.header.cursor
    }

    /// Maximum number of whole elements the buffer can hold.
    pub fn max(&self) -> usize {
        self.valid_len()
            .checked_div(self.header.element_size)
            .unwrap_or(0)
    }

    /// Returns `true` when the cursor is zero.
    pub fn is_empty(&self) -> bool {
        self.header.cursor == 0
    }

    /// Returns `true` when no whole slot is left at the cursor.
    pub fn is_full(&self) -> bool {
        self.header.cursor >= self.max()
    }

    /// The whole valid buffer region, populated or not.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buffer[..self.valid_len()]
    }

    /// The bytes of the populated elements.
    pub fn populated_bytes(&self) -> &'a [u8] {
        &self.buffer[..self.populated() * self.header.element_size]
    }

    /// Returns the bytes of the slot at `index`.
    ///
    /// Any slot below [`max`](Self::max) is addressable, populated or not.
    ///
    /// # Errors
    ///
    /// Returns [`InlineVecError::IndexOutOfBounds`] when `index >= max()`.
    pub fn find(&self, index: usize) -> Result<&'a [u8]> {
        match self.slot_range(index) {
            Some(range) => Ok(&self.buffer[range]),
            None => Err(InlineVecError::IndexOutOfBounds {
                index,
                len: self.max(),
            }),
        }
    }

    /// Returns the bytes of a populated element, or `None` past the cursor.
    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        if index < self.populated() {
            self.slot_range(index).map(|range| &self.buffer[range])
        } else {
            None
        }
    }

    pub(crate) fn valid_len(&self) -> usize {
        self.header.buffer_length.min(self.buffer.len())
    }

    /// Cursor bounded by capacity; a cursor moved past capacity counts as full.
    pub(crate) fn populated(&self) -> usize {
        self.header.cursor.min(self.max())
    }

    pub(crate) fn slot_range(&self, slot: usize) -> Option<Range<usize>> {
        let width = self.header.element_size;
        if width == 0 {
            return None;
        }
        let start = slot.checked_mul(width)?;
        let end = start.checked_add(width)?;
        (end <= self.valid_len()).then_some(start..end)
    }
}

/// Mutable canonical view carrying the shared mutating operations.
///
/// # Examples
///
/// ```rust
/// use saturn_inline_vec::fill;
///
/// let mut words = [0u64; 16];
/// let storage: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
/// let total = saturn_inline_vec::HEADER_SIZE + 8;
///
/// let mut view = fill(storage, total, 2).unwrap();
/// assert_eq!(view.max(), 4);
///
/// view.push(&[1, 0]).unwrap();
/// view.push(&[3, 0]).unwrap();
/// view.insert(1, &[2, 0]).unwrap();
/// assert_eq!(view.as_view().populated_bytes(), &[1, 0, 2, 0, 3, 0]);
/// ```
#[derive(Debug)]
pub struct InlineViewMut<'a> {
    header: &'a mut InlineHeader,
    buffer: &'a mut [u8],
    policy: IndexPolicy,
}

impl<'a> InlineViewMut<'a> {
    /// Pairs a header with the physical buffer that follows it, using
    /// [`IndexPolicy::Clamp`].
    pub fn from_parts(header: &'a mut InlineHeader, buffer: &'a mut [u8]) -> Self {
        Self {
            header,
            buffer,
            policy: IndexPolicy::default(),
        }
    }

    /// Reinterprets raw, already initialized storage as header-plus-buffer.
    ///
    /// # Errors
    ///
    /// Same conditions as [`InlineView::from_storage`].
    pub fn from_storage(storage: &'a mut [u8]) -> Result<Self> {
        let available = storage.len();
        check_storage_len(available)?;
        let (head, buffer) = storage.split_at_mut(HEADER_SIZE);
        let header: &mut InlineHeader =
            bytemuck::try_from_bytes_mut(head).map_err(|_| InlineVecError::Misaligned)?;
        validate_header(header, available)?;
        Ok(Self::from_parts(header, buffer))
    }

    /// Replaces the index policy used by the mutating operations.
    pub fn with_policy(mut self, policy: IndexPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The index policy in effect.
    pub fn policy(&self) -> IndexPolicy {
        self.policy
    }

    /// Reborrows as a read-only view.
    pub fn as_view(&self) -> InlineView<'_> {
        InlineView::from_parts(&*self.header, &*self.buffer)
    }

    /// The borrowed header.
    pub fn header(&self) -> &InlineHeader {
        &*self.header
    }

    /// Number of logically populated elements.
    pub fn count(&self) -> usize {
        self.header.cursor
    }

    /// Maximum number of whole elements the buffer can hold.
    pub fn max(&self) -> usize {
        self.as_view().max()
    }

    /// Returns `true` when the cursor is zero.
    pub fn is_empty(&self) -> bool {
        self.as_view().is_empty()
    }

    /// Returns `true` when no whole slot is left at the cursor.
    pub fn is_full(&self) -> bool {
        self.as_view().is_full()
    }

    /// Overwrites the cursor. No bounds check is applied.
    pub fn move_cursor(&mut self, position: usize) {
        self.header.cursor = position;
    }

    /// Zeroes the valid buffer region. The header, cursor included, is untouched.
    pub fn clear(&mut self) {
        let len = self.as_view().valid_len();
        self.buffer[..len].fill(0);
    }

    /// Sorts every whole slot of the buffer in place, populated or not.
    ///
    /// Slots past the cursor take part in the sort, so callers relying on the
    /// populated prefix should keep the tail zeroed or filled with a sentinel.
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        let width = self.header.element_size;
        let len = self.max() * width;
        sort_chunks_by(&mut self.buffer[..len], width, cmp);
    }

    /// Returns the bytes of the slot at `index`; see [`InlineView::find`].
    pub fn find(&self, index: usize) -> Result<&[u8]> {
        self.as_view().find(index)
    }

    /// Mutable bytes of the slot at `index`, bounds-checked against [`max`](Self::max).
    pub fn find_mut(&mut self, index: usize) -> Result<&mut [u8]> {
        let range = self
            .as_view()
            .slot_range(index)
            .ok_or(InlineVecError::IndexOutOfBounds {
                index,
                len: self.max(),
            })?;
        Ok(&mut self.buffer[range])
    }

    /// Duplicates `src` byte for byte: its header and its whole valid buffer,
    /// including the unpopulated tail.
    ///
    /// # Errors
    ///
    /// Returns [`InlineVecError::InsufficientStorage`] if this view's physical
    /// buffer is shorter than `src`'s declared buffer length. Nothing is written then.
    pub fn clone_from_view(&mut self, src: &InlineView<'_>) -> Result<()> {
        let required = src.header().buffer_length;
        let available = self.buffer.len();
        if required > available {
            debug!(required, available, "clone rejected: destination too small");
            return Err(InlineVecError::InsufficientStorage {
                required,
                available,
            });
        }

        let bytes = src.as_bytes();
        self.buffer[..bytes.len()].copy_from_slice(bytes);
        *self.header = *src.header();
        Ok(())
    }

    /// Copies up to `length` raw bytes from `src` at `src_offset` into this buffer at
    /// `dst_offset`.
    ///
    /// The length is clamped independently against the room left in each buffer;
    /// the smaller clamp wins. Returns the number of bytes copied. The cursor is
    /// untouched.
    pub fn copy_from(
        &mut self,
        src: &InlineView<'_>,
        dst_offset: usize,
        src_offset: usize,
        length: usize,
    ) -> usize {
        let dst_room = self.as_view().valid_len().saturating_sub(dst_offset);
        let src_room = src.valid_len().saturating_sub(src_offset);
        let copied = length.min(dst_room).min(src_room);
        if copied == 0 {
            return 0;
        }

        self.buffer[dst_offset..dst_offset + copied]
            .copy_from_slice(&src.buffer[src_offset..src_offset + copied]);
        copied
    }

    /// Overwrites the slot at `index` with one element taken from `data`.
    ///
    /// Under [`IndexPolicy::Clamp`] an index past the cursor is coerced to the
    /// cursor. Writing at the cursor extends the populated range by one.
    ///
    /// # Errors
    ///
    /// [`InlineVecError::Full`] when the slot lies outside the buffer,
    /// [`InlineVecError::PayloadTooShort`] when `data` is shorter than one element.
    pub fn replace(&mut self, index: usize, data: &[u8]) -> Result<()> {
        let payload = self.full_payload(data)?;
        self.replace_bytes(index, payload)
    }

    /// Like [`replace`](Self::replace), copying `min(element_size, data.len())`
    /// bytes and leaving the rest of the slot unmodified.
    pub fn replace_ext(&mut self, index: usize, data: &[u8]) -> Result<()> {
        let payload = self.partial_payload(data)?;
        self.replace_bytes(index, payload)
    }

    /// Appends one element taken from `data` at the cursor.
    ///
    /// # Errors
    ///
    /// [`InlineVecError::Full`] when no whole slot is left; the container is unchanged.
    pub fn push(&mut self, data: &[u8]) -> Result<()> {
        let payload = self.full_payload(data)?;
        self.push_bytes(payload)
    }

    /// Like [`push`](Self::push), copying `min(element_size, data.len())` bytes and
    /// leaving the rest of the slot unmodified.
    pub fn push_ext(&mut self, data: &[u8]) -> Result<()> {
        let payload = self.partial_payload(data)?;
        self.push_bytes(payload)
    }

    /// Inserts one element taken from `data` at `index`, shifting the populated
    /// elements from `index` onward one slot to the right.
    ///
    /// # Errors
    ///
    /// [`InlineVecError::Full`] when the container is already at capacity; nothing
    /// is shifted then.
    pub fn insert(&mut self, index: usize, data: &[u8]) -> Result<()> {
        let payload = self.full_payload(data)?;
        self.insert_bytes(index, payload)
    }

    /// Like [`insert`](Self::insert), copying `min(element_size, data.len())` bytes.
    /// The uncovered remainder of the new slot is zeroed.
    pub fn insert_ext(&mut self, index: usize, data: &[u8]) -> Result<()> {
        let payload = self.partial_payload(data)?;
        self.insert_bytes(index, payload)
    }

    /// Removes the element at `index`, shifting later elements left by one slot.
    ///
    /// Returns the slot index actually removed, which differs from `index` when
    /// the index was clamped. The freed trailing slot is zeroed.
    ///
    /// # Errors
    ///
    /// [`InlineVecError::Empty`] when nothing is populated; the cursor never wraps.
    pub fn remove(&mut self, index: usize) -> Result<usize> {
        self.take(index, &mut [])
    }

    /// Like [`remove`](Self::remove), first copying up to `out.len()` bytes of the
    /// removed element into `out`.
    pub fn take(&mut self, index: usize, out: &mut [u8]) -> Result<usize> {
        let width = self.element_size()?;
        let populated = self.as_view().populated();
        if populated == 0 {
            debug!("remove rejected: inline buffer empty");
            return Err(InlineVecError::Empty);
        }
        let index = self
            .policy
            .resolve(index, populated - 1)
            .ok_or(InlineVecError::IndexOutOfBounds {
                index,
                len: populated,
            })?;

        let start = index * width;
        let end = populated * width;
        let taken = out.len().min(width);
        out[..taken].copy_from_slice(&self.buffer[start..start + taken]);

        self.buffer.copy_within(start + width..end, start);
        self.buffer[end - width..end].fill(0);
        self.header.cursor = populated - 1;
        Ok(index)
    }

    fn replace_bytes(&mut self, index: usize, payload: &[u8]) -> Result<()> {
        let cursor = self.header.cursor;
        let index = self.resolve(index, cursor)?;
        let range = self
            .as_view()
            .slot_range(index)
            .ok_or_else(|| self.full("replace"))?;

        self.buffer[range.start..range.start + payload.len()].copy_from_slice(payload);
        if index == cursor {
            self.header.cursor += 1;
        }
        Ok(())
    }

    fn push_bytes(&mut self, payload: &[u8]) -> Result<()> {
        let cursor = self.header.cursor;
        let range = self
            .as_view()
            .slot_range(cursor)
            .ok_or_else(|| self.full("push"))?;

        self.buffer[range.start..range.start + payload.len()].copy_from_slice(payload);
        self.header.cursor = cursor + 1;
        Ok(())
    }

    fn insert_bytes(&mut self, index: usize, payload: &[u8]) -> Result<()> {
        let width = self.header.element_size;
        let cursor = self.header.cursor;
        let index = self.resolve(index, cursor)?;
        if cursor >= self.max() {
            return Err(self.full("insert"));
        }

        let start = index * width;
        let end = cursor * width;
        self.buffer.copy_within(start..end, start + width);

        let slot = &mut self.buffer[start..start + width];
        slot[..payload.len()].copy_from_slice(payload);
        slot[payload.len()..].fill(0);
        self.header.cursor = cursor + 1;
        Ok(())
    }

    fn element_size(&self) -> Result<usize> {
        match self.header.element_size {
            0 => Err(InlineVecError::ZeroElementSize),
            width => Ok(width),
        }
    }

    fn full_payload<'d>(&self, data: &'d [u8]) -> Result<&'d [u8]> {
        let width = self.element_size()?;
        if data.len() < width {
            return Err(InlineVecError::PayloadTooShort {
                expected: width,
                actual: data.len(),
            });
        }
        Ok(&data[..width])
    }

    fn partial_payload<'d>(&self, data: &'d [u8]) -> Result<&'d [u8]> {
        let width = self.element_size()?;
        Ok(&data[..data.len().min(width)])
    }

    fn resolve(&self, index: usize, limit: usize) -> Result<usize> {
        self.policy.resolve(index, limit).ok_or_else(|| {
            debug!(index, limit, "index rejected by strict policy");
            InlineVecError::IndexOutOfBounds { index, len: limit }
        })
    }

    fn full(&self, operation: &'static str) -> InlineVecError {
        debug!(
            operation,
            cursor = self.header.cursor,
            capacity = self.max(),
            "inline buffer full"
        );
        InlineVecError::Full
    }
}

/// Initializes raw storage as an empty container and returns a view over it.
///
/// The first `total_size` bytes of `storage` are zeroed, then the header is written
/// with `buffer_length = total_size - HEADER_SIZE` and a zero cursor. Bytes past
/// `total_size` are left alone.
///
/// # Errors
///
/// - [`InlineVecError::ZeroElementSize`] when `element_size == 0`
/// - [`InlineVecError::InvalidLayout`] when `total_size` is smaller than the header or
///   larger than `storage`
/// - [`InlineVecError::Misaligned`] when `storage` is not aligned for the header
pub fn fill(
    storage: &mut [u8],
    total_size: usize,
    element_size: usize,
) -> Result<InlineViewMut<'_>> {
    if element_size == 0 {
        return Err(InlineVecError::ZeroElementSize);
    }
    if total_size < HEADER_SIZE || total_size > storage.len() {
        debug!(total_size, available = storage.len(), "fill rejected");
        return Err(InlineVecError::InvalidLayout {
            declared: total_size,
            available: storage.len(),
        });
    }
    if storage
        .as_ptr()
        .align_offset(core::mem::align_of::<InlineHeader>())
        != 0
    {
        return Err(InlineVecError::Misaligned);
    }

    let storage = &mut storage[..total_size];
    storage.fill(0);
    let (head, buffer) = storage.split_at_mut(HEADER_SIZE);
    let header: &mut InlineHeader =
        bytemuck::try_from_bytes_mut(head).map_err(|_| InlineVecError::Misaligned)?;
    *header = InlineHeader::new(total_size, element_size);
    Ok(InlineViewMut::from_parts(header, buffer))
}

/// Copies the first `total_size` bytes of the container in `src` into `dst`.
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Fails if `src` does not hold a valid container, or with
/// [`InlineVecError::InsufficientStorage`] if `dst` is shorter than `src`'s
/// declared total size.
pub fn clone_storage(src: &[u8], dst: &mut [u8]) -> Result<usize> {
    let view = InlineView::from_storage(src)?;
    let required = view.header().total_size;
    if dst.len() < required {
        debug!(required, available = dst.len(), "clone rejected: destination too small");
        return Err(InlineVecError::InsufficientStorage {
            required,
            available: dst.len(),
        });
    }

    dst[..required].copy_from_slice(&src[..required]);
    Ok(required)
}

fn check_storage_len(available: usize) -> Result<()> {
    if available < HEADER_SIZE {
        return Err(InlineVecError::InvalidLayout {
            declared: HEADER_SIZE,
            available,
        });
    }
    Ok(())
}

fn validate_header(header: &InlineHeader, available: usize) -> Result<()> {
    if header.element_size == 0 {
        debug!("storage rejected: zero element size");
        return Err(InlineVecError::ZeroElementSize);
    }
    let declared = header
        .buffer_length
        .saturating_add(HEADER_SIZE)
        .max(header.total_size);
    if declared > available {
        debug!(declared, available, "storage rejected: header exceeds storage");
        return Err(InlineVecError::InvalidLayout {
            declared,
            available,
        });
    }
    Ok(())
}
