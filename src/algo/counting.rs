//! Stable counting sort over integer keys.
//!
//! 1. Projects every element to an `i64` key and finds the key range `[min, max]`.
//! 2. Tallies occurrences into a count array of `max - min + 1` slots.
//! 3. Turns the tallies into cumulative counts (the end position of each key).
//! 4. Walks the input right-to-left, placing each element just before its key's end and
//!    decrementing it, which keeps equal keys in input order.
//!
//! Runs in O(n + k) time and O(n + k) memory for a key range of size k, so it is only a
//! good choice for dense, narrow key ranges. Ranges wider than [`MAX_COUNTING_RANGE`] slots
//! (or wider than `usize` can express) are ordered by the stable LSD radix pass instead.

use crate::algo::radix::radix_order;
use crate::core::{RadixKey, apply_permutation};
use log::{debug, trace};

/// Widest key range tallied directly; wider ranges go through radix passes.
pub const MAX_COUNTING_RANGE: usize = 1 << 20;

/// Sorts the slice by each element's own integer value.
///
/// # Examples
///
/// ```
/// use sortkit::counting_sort;
///
/// let mut data = [5, 3, 8, 4, 2, 5, 4, 1];
/// counting_sort(&mut data);
/// assert_eq!(data, [1, 2, 3, 4, 4, 5, 5, 8]);
/// ```
pub fn counting_sort<T: RadixKey>(v: &mut [T]) -> &mut [T] {
    counting_sort_by_key(v, |x| x.to_radix())
}

/// Stably sorts the slice by an integer key.
///
/// `key` is called exactly once per element.
///
/// # Examples
///
/// ```
/// use sortkit::counting_sort_by_key;
///
/// let mut words = ["ccc", "a", "bb", "d"];
/// counting_sort_by_key(&mut words, |w| w.len() as i64);
/// assert_eq!(words, ["a", "d", "bb", "ccc"]);
/// ```
pub fn counting_sort_by_key<T, F>(v: &mut [T], key: F) -> &mut [T]
where
    F: FnMut(&T) -> i64,
{
    trace!("counting_sort: len={}", v.len());
    if v.len() < 2 {
        return v;
    }

    let keys: Vec<i64> = v.iter().map(key).collect();
    let order = counting_order(&keys);
    apply_permutation(v, order);
    v
}

/// Returns the stable sorted order of `keys` as source indices.
pub(crate) fn counting_order(keys: &[i64]) -> Vec<usize> {
    let Some((min, max)) = min_max(keys) else {
        return Vec::new();
    };

    let range = usize::try_from(max.abs_diff(min))
        .ok()
        .and_then(|r| r.checked_add(1))
        .filter(|&r| r <= MAX_COUNTING_RANGE.max(keys.len()));
    let Some(range) = range else {
        debug!(
            "counting_sort: key range [{}, {}] too wide, using radix passes",
            min, max
        );
        return radix_order(keys);
    };
    let slot = |key: i64| key.abs_diff(min) as usize;

    let mut counts = vec![0usize; range];
    keys.iter().for_each(|&k| counts[slot(k)] += 1);

    // Cumulative counts: counts[s] is one past the last position of slot s.
    for s in 1..range {
        counts[s] += counts[s - 1];
    }

    let mut order = vec![0usize; keys.len()];
    keys.iter().enumerate().rev().for_each(|(index, &k)| {
        let end = &mut counts[slot(k)];
        *end -= 1;
        order[*end] = index;
    });
    order
}

pub(crate) fn min_max(keys: &[i64]) -> Option<(i64, i64)> {
    let first = *keys.first()?;
    Some(
        keys.iter()
            .fold((first, first), |(lo, hi), &k| (lo.min(k), hi.max(k))),
    )
}
