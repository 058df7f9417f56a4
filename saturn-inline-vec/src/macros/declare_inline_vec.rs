/// Declares a concrete header-compatible container type.
///
/// The generated struct is `#[repr(C)]`, `Pod` and `Zeroable`: an [`InlineHeader`]
/// followed by `[$T; $SIZE]`. Because it is `Pod`, its storage can also be handed to
/// [`InlineViewMut::from_storage`] as raw bytes.
///
/// The layout must not contain padding; declaring an element type and capacity that
/// would need trailing padding fails to compile.
///
/// [`InlineHeader`]: crate::InlineHeader
/// [`InlineViewMut::from_storage`]: crate::InlineViewMut::from_storage
#[macro_export]
macro_rules! declare_inline_vec {
    ($Name:ident, $T:ty, $SIZE:expr) => {
        #[repr(C)]
        #[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
        pub struct $Name {
            header: $crate::InlineHeader,
            items: [$T; $SIZE],
        }

        const _: () = {
            use core::mem::size_of;

            const _SIZE: usize = size_of::<$Name>();
            const _EXPECTED_SIZE: usize = $crate::HEADER_SIZE + size_of::<$T>() * $SIZE;
            const _: () = assert!(
                _SIZE == _EXPECTED_SIZE,
                "Size mismatch in inline vec struct!"
            );
        };

        impl $Name {
            /// Creates an empty container with a filled-in header.
            pub fn new() -> Self {
                Self {
                    header: $crate::InlineHeader::for_elements(
                        core::mem::size_of::<$T>(),
                        $SIZE,
                    ),
                    items: [<$T as bytemuck::Zeroable>::zeroed(); $SIZE],
                }
            }

            /// Capacity of the container.
            pub fn capacity(&self) -> usize {
                $SIZE
            }

            /// Number of populated elements.
            pub fn len(&self) -> usize {
                self.header.cursor.min($SIZE)
            }

            /// True if nothing is populated.
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Populated elements.
            pub fn as_slice(&self) -> &[$T] {
                &self.items[..self.len()]
            }

            /// Populated element at `index`.
            pub fn get(&self, index: usize) -> Option<&$T> {
                self.as_slice().get(index)
            }

            /// Appends `item` through the shared push operation.
            pub fn push(&mut self, item: $T) -> $crate::Result<()> {
                $crate::HeaderCompatible::inline_view_mut(self).push(bytemuck::bytes_of(&item))
            }

            /// Whole storage, header included.
            pub fn as_storage(&self) -> &[u8] {
                bytemuck::bytes_of(self)
            }

            /// Whole storage, header included.
            pub fn as_storage_mut(&mut self) -> &mut [u8] {
                bytemuck::bytes_of_mut(self)
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::HeaderCompatible for $Name {
            fn inline_view(&self) -> $crate::InlineView<'_> {
                $crate::InlineView::from_parts(&self.header, bytemuck::cast_slice(&self.items))
            }

            fn inline_view_mut(&mut self) -> $crate::InlineViewMut<'_> {
                $crate::InlineViewMut::from_parts(
                    &mut self.header,
                    bytemuck::cast_slice_mut(&mut self.items),
                )
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{HeaderCompatible, InlineVecError, InlineView, InlineViewMut, HEADER_SIZE};

    declare_inline_vec!(Words8, u32, 8);
    declare_inline_vec!(Bytes64, u8, 64);

    fn push_ones(container: &mut impl HeaderCompatible) -> usize {
        let mut view = container.inline_view_mut();
        let width = view.header().element_size;
        let ones = [1u8; 8];
        while view.push_ext(&ones[..width]).is_ok() {}
        view.count()
    }

    #[test]
    fn test_new_is_empty() {
        let words = Words8::new();
        assert!(words.is_empty());
        assert_eq!(words.capacity(), 8);
        assert_eq!(words.inline_view().max(), 8);
        assert_eq!(words.inline_view().header().total_size, HEADER_SIZE + 32);
        assert_eq!(words.as_storage().len(), HEADER_SIZE + 32);
    }

    #[test]
    fn test_push_until_full() {
        let mut words = Words8::default();
        for value in 0..8 {
            words.push(value).unwrap();
        }
        assert_eq!(words.push(8), Err(InlineVecError::Full));
        assert_eq!(words.len(), 8);
        assert_eq!(words.get(7), Some(&7));
    }

    #[test]
    fn test_shared_operations_across_types() {
        let mut words = Words8::new();
        let mut bytes = Bytes64::new();
        assert_eq!(push_ones(&mut words), 8);
        assert_eq!(push_ones(&mut bytes), 64);
        assert_eq!(words.as_slice(), &[0x0101_0101; 8]);
        assert!(bytes.as_slice().iter().all(|b| *b == 1));
    }

    #[test]
    fn test_storage_reinterpretation() {
        let mut words = Words8::new();
        words.push(5).unwrap();

        let mut view = InlineViewMut::from_storage(words.as_storage_mut()).unwrap();
        view.push(&6u32.to_ne_bytes()).unwrap();
        assert_eq!(view.count(), 2);
        assert_eq!(words.as_slice(), &[5, 6]);

        let view = InlineView::from_storage(words.as_storage()).unwrap();
        assert_eq!(view.find(1).unwrap(), &6u32.to_ne_bytes());
    }

    #[test]
    fn test_clone_into_larger_container() {
        let mut words = Words8::new();
        words.push(1).unwrap();
        words.push(2).unwrap();

        let mut bytes = Bytes64::new();
        bytes
            .inline_view_mut()
            .clone_from_view(&words.inline_view())
            .unwrap();

        let view = bytes.inline_view();
        assert_eq!(view.header(), words.inline_view().header());
        assert_eq!(view.count(), 2);
        assert_eq!(view.max(), 8);
        assert_eq!(view.find(1).unwrap(), &2u32.to_ne_bytes());
    }

    #[test]
    fn test_clone_into_smaller_container_rejected() {
        let bytes = Bytes64::new();
        let mut words = Words8::new();
        assert_eq!(
            words.inline_view_mut().clone_from_view(&bytes.inline_view()),
            Err(InlineVecError::InsufficientStorage {
                required: 64,
                available: 32,
            })
        );
    }
}
