//! In-place heap sort.

use log::trace;
use std::cmp::Ordering;

/// Sorts the slice with heap sort.
///
/// # Examples
///
/// ```
/// use sortkit::heap_sort;
///
/// let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
/// heap_sort(&mut data);
/// assert_eq!(data, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn heap_sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    heap_sort_by(v, T::cmp)
}

/// Sorts the slice with heap sort using a comparator.
///
/// Builds a max-heap bottom-up from the last non-leaf node, then repeatedly swaps the root
/// behind the shrinking heap and sifts the new root down.
pub fn heap_sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("heap_sort: len={}", v.len());
    let len = v.len();
    if len < 2 {
        return v;
    }

    for node in (0..len / 2).rev() {
        heapify(v, node, &mut compare);
    }

    for end in (1..len).rev() {
        v.swap(0, end);
        heapify(&mut v[..end], 0, &mut compare);
    }
    v
}

/// Sorts the slice with heap sort, ordering elements by a key.
pub fn heap_sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    heap_sort_by(v, |a, b| key(a).cmp(&key(b)))
}

/// Sifts `node` down until `parent >= child` holds for the subtree rooted there.
fn heapify<T, F>(v: &mut [T], mut node: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    loop {
        let left = 2 * node + 1;
        let right = left + 1;

        let mut largest = node;
        if left < len && compare(&v[left], &v[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < len && compare(&v[right], &v[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == node {
            break;
        }

        v.swap(node, largest);
        node = largest;
    }
}
