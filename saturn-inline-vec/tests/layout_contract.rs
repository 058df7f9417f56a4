use saturn_inline_vec::{
    clone_storage, declare_inline_vec, fill, HeaderCompatible, InlineVec, InlineVecError,
    InlineView, InlineViewMut, HEADER_SIZE,
};

declare_inline_vec!(Slots8, u32, 8);
declare_inline_vec!(Slots2, u32, 2);

fn values(view: &InlineView<'_>) -> Vec<u32> {
    view.populated_bytes()
        .chunks_exact(4)
        .map(|chunk| u32::from_ne_bytes(chunk.try_into().unwrap()))
        .collect()
}

#[test]
fn push_insert_remove_scenario() {
    let mut slots = Slots8::new();
    {
        let view = slots.inline_view();
        assert_eq!(view.header().buffer_length, 32);
        assert_eq!(view.max(), 8);
        assert_eq!(view.count(), 0);
    }

    for value in [1u32, 2, 3, 4] {
        slots.push(value).unwrap();
    }
    assert_eq!(slots.inline_view().count(), 4);
    assert_eq!(slots.inline_view().find(1).unwrap(), &2u32.to_ne_bytes());

    slots
        .inline_view_mut()
        .insert(1, &99u32.to_ne_bytes())
        .unwrap();
    assert_eq!(values(&slots.inline_view()), vec![1, 99, 2, 3, 4]);
    assert_eq!(slots.inline_view().count(), 5);

    slots.inline_view_mut().remove(0).unwrap();
    assert_eq!(values(&slots.inline_view()), vec![99, 2, 3, 4]);
    assert_eq!(slots.inline_view().count(), 4);
}

#[test]
fn ninth_push_fails_without_side_effects() {
    let mut list: InlineVec<u32, 8> = InlineVec::new();
    for value in 1..=8 {
        list.push(value).unwrap();
    }
    let before = list;

    assert_eq!(list.push(9), Err(InlineVecError::Full));
    assert_eq!(list.count(), 8);
    assert_eq!(list.as_bytes(), before.as_bytes());
    assert_eq!(list.header(), before.header());
}

#[test]
fn same_operations_on_every_layout() {
    fn append_twice(container: &mut impl HeaderCompatible, value: u32) -> Vec<bool> {
        let mut view = container.inline_view_mut();
        let bytes = value.to_ne_bytes();
        vec![view.push(&bytes).is_ok(), view.push(&bytes).is_ok()]
    }

    let mut small = Slots2::new();
    let mut large = Slots8::new();
    let mut typed: InlineVec<u32, 1> = InlineVec::new();

    assert_eq!(append_twice(&mut small, 7), vec![true, true]);
    assert_eq!(append_twice(&mut large, 7), vec![true, true]);
    assert_eq!(append_twice(&mut typed, 7), vec![true, false]);
    assert_eq!(append_twice(&mut small, 7), vec![false, false]);
}

#[test]
fn clear_keeps_every_header_field() {
    let mut slots = Slots8::new();
    slots.push(1).unwrap();
    slots.push(2).unwrap();
    let header = *slots.inline_view().header();

    slots.inline_view_mut().clear();
    assert_eq!(*slots.inline_view().header(), header);
    assert!(slots.inline_view().as_bytes().iter().all(|b| *b == 0));

    slots.inline_view_mut().move_cursor(0);
    assert!(slots.is_empty());
}

#[test]
fn raw_storage_round_trip() {
    let mut src_words = [0u64; 12];
    let mut dst_words = [0u64; 12];
    let src: &mut [u8] = bytemuck::cast_slice_mut(&mut src_words);
    let dst: &mut [u8] = bytemuck::cast_slice_mut(&mut dst_words);

    {
        let mut view = fill(src, HEADER_SIZE + 32, 4).unwrap();
        view.push(&1u32.to_ne_bytes()).unwrap();
        view.find_mut(5).unwrap().copy_from_slice(&55u32.to_ne_bytes());
    }

    assert_eq!(clone_storage(src, dst), Ok(HEADER_SIZE + 32));

    let copy = InlineView::from_storage(dst).unwrap();
    assert_eq!(copy.count(), 1);
    assert_eq!(copy.find(5).unwrap(), &55u32.to_ne_bytes());
    assert_eq!(copy.as_bytes(), InlineView::from_storage(src).unwrap().as_bytes());
}

#[test]
fn corrupted_storage_is_rejected() {
    let mut slots = Slots2::new();
    let storage = slots.as_storage_mut();
    let header: &mut saturn_inline_vec::InlineHeader =
        bytemuck::from_bytes_mut(&mut storage[..HEADER_SIZE]);
    header.element_size = 0;

    assert_eq!(
        InlineViewMut::from_storage(storage).unwrap_err(),
        InlineVecError::ZeroElementSize
    );
}
