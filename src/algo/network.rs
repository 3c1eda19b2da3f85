//! Bitonic ("cube") sort.
//!
//! A sorting network over power-of-two lengths. Stage `k` (2, 4, ..., n) merges bitonic runs
//! of size `k`; within a stage, strides `j` run `k/2, k/4, ..., 1`, and position `i` is
//! compared with its hypercube neighbour `i ^ j`. The pair is put in ascending order when
//! bit `k` of `i` is clear and descending order otherwise.
//!
//! Which pairs get compared depends only on `n`, never on the values, so the same schedule
//! could be run in parallel lanes. This implementation runs it sequentially in
//! O(n log² n) comparisons.

use crate::core::{Result, SortError};
use log::{debug, trace};
use std::cmp::Ordering;

/// Sorts a power-of-two-length slice with bitonic sort.
///
/// # Errors
///
/// Returns [`SortError::InvalidCollectionSize`] if the length is neither zero nor a power of
/// two. The slice is left untouched in that case.
///
/// # Examples
///
/// ```
/// use sortkit::cube_sort;
///
/// let mut data = [5, 3, 8, 4, 2, 5, 4, 1];
/// cube_sort(&mut data).unwrap();
/// assert_eq!(data, [1, 2, 3, 4, 4, 5, 5, 8]);
///
/// assert!(cube_sort(&mut [3, 2, 1]).is_err());
/// ```
pub fn cube_sort<T: Ord>(v: &mut [T]) -> Result<&mut [T]> {
    cube_sort_by(v, T::cmp)
}

/// Sorts a power-of-two-length slice with bitonic sort using a comparator.
pub fn cube_sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<&mut [T]>
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("cube_sort: len={}", v.len());
    let len = v.len();
    if len != 0 && !len.is_power_of_two() {
        debug!("cube_sort: rejected non power-of-two len={}", len);
        return Err(SortError::InvalidCollectionSize { len });
    }
    if len < 2 {
        return Ok(v);
    }

    let mut stage = 2;
    while stage <= len {
        let mut stride = stage / 2;
        while stride > 0 {
            for i in 0..len {
                let partner = i ^ stride;
                if partner > i {
                    let ascending = (i & stage) == 0;
                    compare_exchange(v, i, partner, ascending, &mut compare);
                }
            }
            stride /= 2;
        }
        stage *= 2;
    }
    Ok(v)
}

/// Sorts a power-of-two-length slice with bitonic sort, ordering elements by a key.
pub fn cube_sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> Result<&mut [T]>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    cube_sort_by(v, |a, b| key(a).cmp(&key(b)))
}

/// Orders `v[lo]` and `v[hi]` (with `lo < hi`) in the requested direction.
#[inline(always)]
fn compare_exchange<T, F>(v: &mut [T], lo: usize, hi: usize, ascending: bool, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let misplaced = if ascending {
        Ordering::Greater
    } else {
        Ordering::Less
    };
    if compare(&v[lo], &v[hi]) == misplaced {
        v.swap(lo, hi);
    }
}
