//! The sorting algorithms.
//!
//! Every algorithm sorts a `&mut [T]` in place into non-decreasing order and hands the
//! same slice back so calls can be chained. Sequences shorter than two elements are
//! returned untouched, without invoking the supplied comparator, key or normalizer.
//!
//! - **Comparison sorts**: bubble, insertion, selection, shell ([`comparison`]), quick,
//!   merge, heap and binary-search-tree sort.
//! - **Non-comparison sorts**: counting, radix and bucket sort, driven by a projection.
//! - **Sorting network**: bitonic "cube" sort, for power-of-two lengths.
//!
//! Only merge sort, counting sort and radix sort guarantee stability.
//!
//! [`Algorithm`] enumerates all of them for code that needs to iterate over the set.

pub mod bucket;
pub mod comparison;
pub mod counting;
pub mod heap;
pub mod merge;
pub mod network;
pub mod quick;
pub mod radix;
pub mod tree;

pub use bucket::{bucket_sort, bucket_sort_by};
pub use comparison::{
    bubble_sort, bubble_sort_by, bubble_sort_by_key, insertion_sort, insertion_sort_by,
    insertion_sort_by_key, selection_sort, selection_sort_by, selection_sort_by_key, shell_sort,
    shell_sort_by, shell_sort_by_key,
};
pub use counting::{counting_sort, counting_sort_by_key};
pub use heap::{heap_sort, heap_sort_by, heap_sort_by_key};
pub use merge::{merge_sort, merge_sort_by, merge_sort_by_key};
pub use network::{cube_sort, cube_sort_by, cube_sort_by_key};
pub use quick::{
    quick_sort, quick_sort_by, quick_sort_by_key, quick_sort_range, quick_sort_range_by,
};
pub use radix::{radix_sort, radix_sort_by_key};
pub use tree::{tree_sort, tree_sort_by, tree_sort_by_key};

use crate::core::{RadixKey, Result, UnitScale};
use std::fmt;

/// Names every algorithm in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Shell,
    Quick,
    Merge,
    Heap,
    Tree,
    Counting,
    Radix,
    Bucket,
    Cube,
}

impl Algorithm {
    pub const ALL: [Algorithm; 12] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Shell,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Tree,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
        Algorithm::Cube,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Selection => "selection_sort",
            Algorithm::Shell => "shell_sort",
            Algorithm::Quick => "quick_sort",
            Algorithm::Merge => "merge_sort",
            Algorithm::Heap => "heap_sort",
            Algorithm::Tree => "tree_sort",
            Algorithm::Counting => "counting_sort",
            Algorithm::Radix => "radix_sort",
            Algorithm::Bucket => "bucket_sort",
            Algorithm::Cube => "cube_sort",
        }
    }

    /// Whether the algorithm guarantees that equal keys keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Merge | Algorithm::Counting | Algorithm::Radix
        )
    }

    /// Whether the algorithm only accepts power-of-two lengths.
    pub fn requires_power_of_two(self) -> bool {
        self == Algorithm::Cube
    }

    /// Sorts integer-like elements with this algorithm.
    ///
    /// Non-comparison algorithms key each element by its own integer value; bucket sort
    /// normalizes those keys over the observed min/max. Only cube sort can fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortkit::Algorithm;
    ///
    /// for algorithm in Algorithm::ALL {
    ///     let mut data = [4, 1, 3, 2];
    ///     algorithm.sort(&mut data).unwrap();
    ///     assert_eq!(data, [1, 2, 3, 4], "{algorithm}");
    /// }
    /// ```
    pub fn sort<T: RadixKey + Ord>(self, v: &mut [T]) -> Result<&mut [T]> {
        let sorted = match self {
            Algorithm::Bubble => bubble_sort(v),
            Algorithm::Insertion => insertion_sort(v),
            Algorithm::Selection => selection_sort(v),
            Algorithm::Shell => shell_sort(v),
            Algorithm::Quick => quick_sort(v),
            Algorithm::Merge => merge_sort(v),
            Algorithm::Heap => heap_sort(v),
            Algorithm::Tree => tree_sort(v),
            Algorithm::Counting => counting_sort(v),
            Algorithm::Radix => radix_sort(v),
            Algorithm::Bucket => {
                let Some(scale) = UnitScale::from_values(v.iter().map(|x| x.to_radix() as f64))
                else {
                    return Ok(v);
                };
                bucket_sort(v, |x| scale.apply(x.to_radix() as f64))
            }
            Algorithm::Cube => cube_sort(v)?,
        };
        Ok(sorted)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
