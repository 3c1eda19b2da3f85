//! Top-down merge sort.
//!
//! Splits at the midpoint, sorts both halves, then merges them through an auxiliary buffer
//! and copies the result back. O(n log n) in every case and stable: on ties the element
//! from the left half is taken first.

use log::trace;
use std::cmp::Ordering;

/// Sorts the slice with merge sort.
///
/// # Examples
///
/// ```
/// use sortkit::merge_sort;
///
/// let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// merge_sort(&mut data);
/// assert_eq!(data, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) -> &mut [T] {
    merge_sort_by(v, T::cmp)
}

/// Sorts the slice with merge sort using a comparator.
pub fn merge_sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("merge_sort: len={}", v.len());
    if v.len() < 2 {
        return v;
    }

    let mut buffer = Vec::with_capacity(v.len());
    sort_range(v, &mut buffer, &mut compare);
    v
}

/// Sorts the slice with merge sort, ordering elements by a key.
pub fn merge_sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> &mut [T]
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(v, |a, b| key(a).cmp(&key(b)))
}

fn sort_range<T, F>(v: &mut [T], buffer: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }
    let mid = v.len() / 2;
    sort_range(&mut v[..mid], buffer, compare);
    sort_range(&mut v[mid..], buffer, compare);
    merge(v, mid, buffer, compare);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]`.
fn merge<T, F>(v: &mut [T], mid: usize, buffer: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    buffer.clear();
    let (left, right) = v.split_at(mid);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        // Strictly less: ties take from the left run.
        if compare(&right[j], &left[i]) == Ordering::Less {
            buffer.push(right[j].clone());
            j += 1;
        } else {
            buffer.push(left[i].clone());
            i += 1;
        }
    }
    buffer.extend_from_slice(&left[i..]);
    buffer.extend_from_slice(&right[j..]);

    v.clone_from_slice(buffer);
}
