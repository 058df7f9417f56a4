//! In-place ordering of fixed-width byte chunks.
//!
//! The element width is only known at runtime, so the slice sort methods cannot be
//! used directly. A heapsort keeps the operation allocation-free.

use core::cmp::Ordering;

/// Sorts `bytes` as consecutive chunks of `width` bytes using `cmp`.
///
/// Trailing bytes that do not form a whole chunk are left in place. A zero `width`
/// is a no-op. The sort is not stable.
pub fn sort_chunks_by<F>(bytes: &mut [u8], width: usize, mut cmp: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    if width == 0 {
        return;
    }
    let len = bytes.len() / width;

    for root in (0..len / 2).rev() {
        sift_down(bytes, width, root, len, &mut cmp);
    }
    for end in (1..len).rev() {
        swap_chunks(bytes, width, 0, end);
        sift_down(bytes, width, 0, end, &mut cmp);
    }
}

fn sift_down<F>(bytes: &mut [u8], width: usize, mut root: usize, end: usize, cmp: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end
            && cmp(chunk(bytes, width, child), chunk(bytes, width, child + 1)) == Ordering::Less
        {
            child += 1;
        }
        if cmp(chunk(bytes, width, root), chunk(bytes, width, child)) != Ordering::Less {
            break;
        }
        swap_chunks(bytes, width, root, child);
        root = child;
    }
}

#[inline]
fn chunk(bytes: &[u8], width: usize, index: usize) -> &[u8] {
    &bytes[index * width..(index + 1) * width]
}

// Requires `a < b`.
#[inline]
fn swap_chunks(bytes: &mut [u8], width: usize, a: usize, b: usize) {
    let (low, high) = bytes.split_at_mut(b * width);
    low[a * width..(a + 1) * width].swap_with_slice(&mut high[..width]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn by_u32(a: &[u8], b: &[u8]) -> Ordering {
        let a = u32::from_le_bytes(a.try_into().unwrap());
        let b = u32::from_le_bytes(b.try_into().unwrap());
        a.cmp(&b)
    }

    #[test]
    fn test_sorts_words() {
        let mut words = [5u32, 1, 4, 2, 3];
        let mut bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        sort_chunks_by(&mut bytes, 4, by_u32);
        words.sort();
        let expected: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_zero_width_is_noop() {
        let mut bytes = [3u8, 2, 1];
        sort_chunks_by(&mut bytes, 0, |a, b| a.cmp(b));
        assert_eq!(bytes, [3, 2, 1]);
    }

    #[test]
    fn test_partial_tail_untouched() {
        let mut bytes = [9u8, 9, 1, 1, 7];
        sort_chunks_by(&mut bytes, 2, |a, b| a.cmp(b));
        assert_eq!(bytes, [1, 1, 9, 9, 7]);
    }

    #[test]
    fn test_reverse_comparator() {
        let mut bytes = [1u8, 3, 2];
        sort_chunks_by(&mut bytes, 1, |a, b| b.cmp(a));
        assert_eq!(bytes, [3, 2, 1]);
    }

    proptest! {
        #[test]
        fn prop_matches_slice_sort(values in proptest::collection::vec(any::<u16>(), 0..64)) {
            let mut bytes: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();
            sort_chunks_by(&mut bytes, 2, |a, b| a.cmp(b));

            let mut expected = values.clone();
            expected.sort();
            let expected: Vec<u8> = expected.iter().flat_map(|v| v.to_be_bytes()).collect();
            prop_assert_eq!(bytes, expected);
        }
    }
}
