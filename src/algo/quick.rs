//! Quicksort with a last-element pivot.
//!
//! Two entry points: [`quick_sort`] over the whole slice and [`quick_sort_range`] over an
//! inclusive `[left, right]` index range. The ranged variant clamps a negative `left` to 0,
//! treats `left >= right` as a no-op and rejects a `right` past the end of the slice.

use crate::core::{Result, SortError};
use log::{debug, trace};
use std::cmp::Ordering;

/// Sorts the slice with quicksort.
///
/// # Examples
///
/// ```
/// use sortkit::quick_sort;
///
/// let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
/// quick_sort(&mut data);
/// assert_eq!(data, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn quick_sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    quick_sort_by(v, T::cmp)
}

/// Sorts the slice with quicksort using a comparator.
pub fn quick_sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("quick_sort: len={}", v.len());
    if v.len() < 2 {
        return v;
    }
    quicksort(v, &mut compare);
    v
}

/// Sorts the slice with quicksort, ordering elements by a key.
pub fn quick_sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    quick_sort_by(v, |a, b| key(a).cmp(&key(b)))
}

/// Sorts the inclusive index range `[left, right]` of the slice, leaving the rest untouched.
///
/// # Errors
///
/// Returns [`SortError::IndexOutOfRange`] if `left < right` and `right` is not a valid
/// index. Nothing is modified in that case.
///
/// # Examples
///
/// ```
/// use sortkit::quick_sort_range;
///
/// let mut data = [8, 4, 3, 7, 6, 5, 2];
/// quick_sort_range(&mut data, 1, 5).unwrap();
/// assert_eq!(data, [8, 3, 4, 5, 6, 7, 2]);
///
/// assert!(quick_sort_range(&mut data, 0, 7).is_err());
/// ```
pub fn quick_sort_range<T: Ord>(v: &mut [T], left: isize, right: isize) -> Result<&mut [T]> {
    quick_sort_range_by(v, left, right, T::cmp)
}

/// Sorts the inclusive index range `[left, right]` using a comparator.
pub fn quick_sort_range_by<T, F>(
    v: &mut [T],
    left: isize,
    right: isize,
    mut compare: F,
) -> Result<&mut [T]>
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("quick_sort_range: len={} left={} right={}", v.len(), left, right);
    let left = left.max(0);
    if left >= right {
        return Ok(v);
    }

    // Here 0 <= left < right, so both fit in usize.
    let len = v.len();
    let (lo, hi) = (left as usize, right as usize);
    if hi >= len {
        debug!("quick_sort_range: right={} out of range for len={}", right, len);
        return Err(SortError::IndexOutOfRange { index: right, len });
    }

    quicksort(&mut v[lo..=hi], &mut compare);
    Ok(v)
}

/// Recurses into the smaller partition and loops on the larger one, keeping the stack
/// depth logarithmic even when partitions are maximally unbalanced.
fn quicksort<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() > 1 {
        let mid = partition(v, compare);
        let (lower, rest) = std::mem::take(&mut v).split_at_mut(mid);
        let upper = &mut rest[1..];

        if lower.len() < upper.len() {
            quicksort(lower, compare);
            v = upper;
        } else {
            quicksort(upper, compare);
            v = lower;
        }
    }
}

/// Lomuto partition around the last element.
///
/// Returns the pivot's final index: everything before it is `<=` the pivot, everything
/// after it is `>`.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = v.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if compare(&v[i], &v[pivot]) != Ordering::Greater {
            v.swap(i, store);
            store += 1;
        }
    }
    v.swap(store, pivot);
    store
}
