//! Quadratic comparison sorts: bubble, insertion, selection and shell sort.
//!
//! These are the simple exchange- and insertion-based algorithms. All run in O(n²) time in
//! the worst case; bubble and insertion sort drop to O(n) on already sorted input.

use log::trace;
use std::cmp::Ordering;

/// Sorts the slice with bubble sort.
///
/// # Examples
///
/// ```
/// use sortkit::bubble_sort;
///
/// let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
/// bubble_sort(&mut data);
/// assert_eq!(data, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn bubble_sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    bubble_sort_by(v, T::cmp)
}

/// Sorts the slice with bubble sort using a comparator.
///
/// Each pass swaps adjacent out-of-order pairs and settles the largest remaining element
/// at the end of the unsorted region. Stops after the first pass without a swap.
pub fn bubble_sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("bubble_sort: len={}", v.len());
    if v.len() < 2 {
        return v;
    }

    let mut end = v.len();
    while end > 1 {
        let mut swapped = false;
        for i in 1..end {
            if compare(&v[i - 1], &v[i]) == Ordering::Greater {
                v.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
    v
}

/// Sorts the slice with bubble sort, ordering elements by a key.
pub fn bubble_sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    bubble_sort_by(v, |a, b| key(a).cmp(&key(b)))
}

/// Sorts the slice with insertion sort.
///
/// # Examples
///
/// ```
/// use sortkit::insertion_sort;
///
/// let mut data = vec!["pear", "fig", "apple"];
/// insertion_sort(&mut data);
/// assert_eq!(data, ["apple", "fig", "pear"]);
/// ```
pub fn insertion_sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    insertion_sort_by(v, T::cmp)
}

/// Sorts the slice with insertion sort using a comparator.
pub fn insertion_sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("insertion_sort: len={}", v.len());
    if v.len() < 2 {
        return v;
    }
    insert_each(v, &mut compare);
    v
}

/// Sorts the slice with insertion sort, ordering elements by a key.
pub fn insertion_sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    insertion_sort_by(v, |a, b| key(a).cmp(&key(b)))
}

/// Grows a sorted prefix one element at a time.
///
/// The next element moves left past every strictly greater element of the prefix, so
/// equal elements keep their order.
pub(crate) fn insert_each<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[i]) == Ordering::Greater {
            j -= 1;
        }
        if j != i {
            v[j..=i].rotate_right(1);
        }
    }
}

/// Sorts the slice with selection sort.
///
/// # Examples
///
/// ```
/// use sortkit::selection_sort;
///
/// let mut data = [9, -2, 7, 0];
/// selection_sort(&mut data);
/// assert_eq!(data, [-2, 0, 7, 9]);
/// ```
pub fn selection_sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    selection_sort_by(v, T::cmp)
}

/// Sorts the slice with selection sort using a comparator.
///
/// Always performs n(n-1)/2 comparisons but at most n-1 swaps.
pub fn selection_sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("selection_sort: len={}", v.len());
    let len = v.len();
    if len < 2 {
        return v;
    }

    for i in 0..len - 1 {
        let mut min = i;
        for j in i + 1..len {
            if compare(&v[j], &v[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            v.swap(i, min);
        }
    }
    v
}

/// Sorts the slice with selection sort, ordering elements by a key.
pub fn selection_sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    selection_sort_by(v, |a, b| key(a).cmp(&key(b)))
}

/// Sorts the slice with shell sort.
///
/// # Examples
///
/// ```
/// use sortkit::shell_sort;
///
/// let mut data = [23, 5, 17, 1, 9, 12];
/// shell_sort(&mut data);
/// assert_eq!(data, [1, 5, 9, 12, 17, 23]);
/// ```
pub fn shell_sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    shell_sort_by(v, T::cmp)
}

/// Sorts the slice with shell sort using a comparator.
///
/// Gaps start at n/2 and halve down to 1; the final gap-1 pass is a plain insertion sort.
pub fn shell_sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("shell_sort: len={}", v.len());
    let len = v.len();
    if len < 2 {
        return v;
    }

    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && compare(&v[j - gap], &v[j]) == Ordering::Greater {
                v.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
    v
}

/// Sorts the slice with shell sort, ordering elements by a key.
pub fn shell_sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    shell_sort_by(v, |a, b| key(a).cmp(&key(b)))
}
