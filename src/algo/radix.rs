//! LSD radix sort, base 10.
//!
//! Keys are shifted by the minimum key so negative values sort correctly, then sorted one
//! decimal digit at a time from least to most significant. Each digit pass is a stable
//! counting sort, which is what makes the whole sort stable. The number of passes is the
//! digit count of the largest shifted key.

use crate::algo::counting::min_max;
use crate::core::{RadixKey, apply_permutation};
use cuneiform::cuneiform;
use log::trace;

/// Digit base of each counting pass.
pub const RADIX_BASE: u64 = 10;

// Cache-aligned digit tally.
#[cuneiform]
struct DigitCounts {
    data: [usize; RADIX_BASE as usize],
}

/// Sorts the slice through its [`RadixKey`] conversion.
///
/// Elements are widened to `i64`, the keys are sorted, and the sorted keys are narrowed
/// back into the slice.
///
/// # Examples
///
/// ```
/// use sortkit::radix_sort;
///
/// let mut data = [170i32, -45, 75, 90, -802, 24, 2, 66];
/// radix_sort(&mut data);
/// assert_eq!(data, [-802, -45, 2, 24, 66, 75, 90, 170]);
/// ```
pub fn radix_sort<T: RadixKey>(v: &mut [T]) -> &mut [T] {
    trace!("radix_sort: len={}", v.len());
    if v.len() < 2 {
        return v;
    }

    let keys: Vec<i64> = v.iter().map(|x| x.to_radix()).collect();
    let order = radix_order(&keys);
    v.iter_mut()
        .zip(order)
        .for_each(|(slot, index)| *slot = T::from_radix(keys[index]));
    v
}

/// Stably sorts the slice by an integer key, moving the elements themselves.
///
/// `key` is called exactly once per element.
///
/// # Examples
///
/// ```
/// use sortkit::radix_sort_by_key;
///
/// let mut people = [("carol", 31), ("alice", 27), ("bob", 31), ("dave", 19)];
/// radix_sort_by_key(&mut people, |p| p.1);
/// assert_eq!(people, [("dave", 19), ("alice", 27), ("carol", 31), ("bob", 31)]);
/// ```
pub fn radix_sort_by_key<T, F>(v: &mut [T], key: F) -> &mut [T]
where
    F: FnMut(&T) -> i64,
{
    trace!("radix_sort_by_key: len={}", v.len());
    if v.len() < 2 {
        return v;
    }

    let keys: Vec<i64> = v.iter().map(key).collect();
    let order = radix_order(&keys);
    apply_permutation(v, order);
    v
}

/// Returns the stable sorted order of `keys` as source indices.
pub(crate) fn radix_order(keys: &[i64]) -> Vec<usize> {
    let Some((min, _)) = min_max(keys) else {
        return Vec::new();
    };

    let shifted: Vec<u64> = keys.iter().map(|k| k.abs_diff(min)).collect();
    let max = shifted.iter().copied().max().unwrap_or(0);

    let mut order: Vec<usize> = (0..keys.len()).collect();
    let mut scratch = vec![0usize; keys.len()];
    let mut place = 1u64;
    loop {
        digit_pass(&shifted, place, &order, &mut scratch);
        std::mem::swap(&mut order, &mut scratch);
        // Stop once the largest key has no digit above `place`.
        if max / place < RADIX_BASE {
            break;
        }
        place *= RADIX_BASE;
    }
    order
}

/// One stable counting pass over the digit at `place`, reading `order` into `out`.
fn digit_pass(shifted: &[u64], place: u64, order: &[usize], out: &mut [usize]) {
    let mut counts = DigitCounts {
        data: [0; RADIX_BASE as usize],
    };
    let counts = &mut counts.data;

    order
        .iter()
        .for_each(|&i| counts[digit(shifted[i], place)] += 1);

    let mut sum = 0;
    counts.iter_mut().for_each(|count| {
        sum += *count;
        *count = sum;
    });

    order.iter().rev().for_each(|&i| {
        let d = digit(shifted[i], place);
        counts[d] -= 1;
        out[counts[d]] = i;
    });
}

#[inline(always)]
fn digit(value: u64, place: u64) -> usize {
    ((value / place) % RADIX_BASE) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit() {
        assert_eq!(digit(4_321, 1), 1);
        assert_eq!(digit(4_321, 10), 2);
        assert_eq!(digit(4_321, 1_000), 4);
        assert_eq!(digit(4_321, 10_000), 0);
    }

    #[test]
    fn test_digit_pass_is_stable() {
        let shifted = [21, 11, 32, 12];
        let order = [0, 1, 2, 3];
        let mut out = [0; 4];
        digit_pass(&shifted, 1, &order, &mut out);
        assert_eq!(out, [0, 1, 2, 3]);
        digit_pass(&shifted, 10, &out.clone(), &mut out);
        assert_eq!(out, [1, 3, 0, 2]);
    }

    #[test]
    fn test_full_i64_range() {
        let mut data = [i64::MAX, 0, i64::MIN, -1, 1, i64::MIN + 1];
        radix_sort(&mut data);
        assert_eq!(data, [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX]);
    }

    #[test]
    fn test_all_equal_single_pass() {
        let keys = [7, 7, 7];
        assert_eq!(radix_order(&keys), vec![0, 1, 2]);
    }
}
