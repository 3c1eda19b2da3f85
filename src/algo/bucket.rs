//! Bucket sort over values normalized into `[0, 1]`.
//!
//! `n` buckets are allocated; each element lands in bucket `floor(x * n)` for its normalized
//! value `x`, clamped into `[0, n - 1]`. Buckets are insertion-sorted with the comparator and
//! concatenated in bucket order. Averages O(n) for uniformly distributed inputs and degrades
//! toward O(n²) when most elements share a bucket.
//!
//! The normalizer must be monotone with the comparator for the result to be sorted.

use crate::algo::comparison::insert_each;
use crate::core::apply_permutation;
use log::trace;
use std::cmp::Ordering;

/// Sorts the slice with bucket sort.
///
/// `normalize` is called exactly once per element.
///
/// # Examples
///
/// ```
/// use sortkit::bucket_sort;
/// use sortkit::core::UnitScale;
///
/// let mut data = [5, 4, 6, 2];
/// let scale = UnitScale::new(2.0, 6.0);
/// bucket_sort(&mut data, |&x| scale.apply(f64::from(x)));
/// assert_eq!(data, [2, 4, 5, 6]);
/// ```
pub fn bucket_sort<T, N>(v: &mut [T], normalize: N) -> &mut [T]
where
    T: Ord,
    N: FnMut(&T) -> f64,
{
    bucket_sort_by(v, normalize, T::cmp)
}

/// Sorts the slice with bucket sort, ordering elements within a bucket by `compare`.
///
/// # Examples
///
/// ```
/// use sortkit::bucket_sort_by;
///
/// let mut data = [0.42, 0.05, 0.97, 0.33, 0.5];
/// bucket_sort_by(&mut data, |&x| x, f64::total_cmp);
/// assert_eq!(data, [0.05, 0.33, 0.42, 0.5, 0.97]);
/// ```
pub fn bucket_sort_by<T, N, F>(v: &mut [T], mut normalize: N, mut compare: F) -> &mut [T]
where
    N: FnMut(&T) -> f64,
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("bucket_sort: len={}", v.len());
    let len = v.len();
    if len < 2 {
        return v;
    }

    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); len];
    v.iter()
        .enumerate()
        .for_each(|(index, item)| buckets[bucket_index(normalize(item), len)].push(index));

    let mut order = Vec::with_capacity(len);
    for bucket in &mut buckets {
        insert_each(bucket, &mut |&a: &usize, &b: &usize| compare(&v[a], &v[b]));
        order.extend_from_slice(bucket);
    }

    apply_permutation(v, order);
    v
}

/// Maps a normalized value onto one of `count` buckets.
///
/// Values below 0 (and NaN) go to the first bucket, values at or above 1 to the last.
#[inline]
fn bucket_index(value: f64, count: usize) -> usize {
    let scaled = (value * count as f64).floor();
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else {
        (scaled as usize).min(count - 1)
    }
}
