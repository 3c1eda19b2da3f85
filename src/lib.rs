//! # Sortkit
//!
//! `sortkit` is a collection of classic, in-place sorting algorithms with a uniform calling
//! convention.
//!
//! Every algorithm sorts a mutable slice into non-decreasing order and returns that same
//! slice, so calls chain. Arrays, `Vec`s, boxed slices and `VecDeque`s (through
//! `make_contiguous`) can all be sorted directly.
//!
//! ## Algorithms
//!
//! | Algorithm | Entry point | Time (avg / worst) | Stable |
//! |---|---|---|---|
//! | Bubble | [`bubble_sort`] | O(n) best, O(n²) / O(n²) | incidental |
//! | Insertion | [`insertion_sort`] | O(n) best, O(n²) / O(n²) | incidental |
//! | Selection | [`selection_sort`] | O(n²) / O(n²) | no |
//! | Shell | [`shell_sort`] | ~O(n^1.3) / O(n²) | no |
//! | Quick | [`quick_sort`], [`quick_sort_range`] | O(n log n) / O(n²) | no |
//! | Merge | [`merge_sort`] | O(n log n) / O(n log n) | **yes** |
//! | Heap | [`heap_sort`] | O(n log n) / O(n log n) | no |
//! | Binary search tree | [`tree_sort`] | O(n log n) / O(n²) | no |
//! | Counting | [`counting_sort`], [`counting_sort_by_key`] | O(n + k) | **yes** |
//! | Radix (LSD, base 10) | [`radix_sort`], [`radix_sort_by_key`] | O(d·n) | **yes** |
//! | Bucket | [`bucket_sort`], [`bucket_sort_by`] | O(n) / O(n²) | no |
//! | Bitonic ("cube") | [`cube_sort`] | O(n log² n) | no |
//!
//! Bubble and insertion sort happen to keep equal elements in order, but only the three
//! marked algorithms promise it.
//!
//! Comparison sorts come in three flavours: `*_sort` for `T: Ord`, `*_sort_by` with a
//! comparator, and `*_sort_by_key` with a key extractor.
//!
//! ## Usage
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! let top = heap_sort(&mut data).last().copied();
//!
//! assert_eq!(data, vec![1, 1, 2, 3, 4, 5, 6, 9]);
//! assert_eq!(top, Some(9));
//! ```
//!
//! ### Non-comparison sorts
//!
//! Counting and radix sort order elements by an `i64` key. Radix sort can also work on the
//! elements directly through the [`RadixKey`] conversion pair.
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let mut jobs = [("b", 3), ("a", 1), ("c", 3), ("d", 2)];
//! counting_sort_by_key(&mut jobs, |job| job.1);
//!
//! // Stable: "b" stays ahead of "c".
//! assert_eq!(jobs, [("a", 1), ("d", 2), ("b", 3), ("c", 3)]);
//! ```
//!
//! ## Preconditions
//!
//! Two entry points validate their input and return a [`SortError`] before touching the
//! slice: [`quick_sort_range`] rejects a `right` index past the end, and [`cube_sort`]
//! rejects lengths that are not a power of two. Everything else accepts any input; sequences
//! of fewer than two elements are returned as-is without calling any supplied closure.

pub mod algo;
pub mod core;
pub use algo::*;
pub use crate::core::{RadixKey, Result, SortError, UnitScale};

pub mod prelude {
    pub use crate::algo::*;
    pub use crate::core::{RadixKey, SortError, UnitScale};
}
