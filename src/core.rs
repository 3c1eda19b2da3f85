//! Core traits and types shared by the sorting algorithms.
//!
//! This module defines:
//! - [`SortError`]: The precondition failures reported by the ranged quicksort and cube sort.
//! - [`RadixKey`]: The explicit integer conversion pair used by counting and radix sort.
//! - [`UnitScale`]: A min/max normalizer that maps values into `[0, 1]` for bucket sort.
//! - apply_permutation: Internal in-place gather used by the index-based sorts.

use thiserror::Error;

/// Errors raised when a caller violates an algorithm's precondition.
///
/// Both variants are reported before the sequence is touched, so a failed call
/// leaves the input exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The `right` bound of a ranged sort lies outside the sequence.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// Cube sort only accepts lengths that are zero or a power of two.
    #[error("invalid collection size {len}: cube sort requires a power-of-two length")]
    InvalidCollectionSize { len: usize },
}

/// Result type returned by the validating entry points.
pub type Result<T> = std::result::Result<T, SortError>;

/// Conversion between an element type and the `i64` domain radix sort works in.
///
/// `from_radix` is only ever called with values previously produced by
/// `to_radix` on the same type, so the narrowing cast back is lossless.
///
/// # Examples
///
/// ```
/// use sortkit::core::RadixKey;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Celsius(i16);
///
/// impl RadixKey for Celsius {
///     fn to_radix(self) -> i64 {
///         i64::from(self.0)
///     }
///
///     fn from_radix(key: i64) -> Self {
///         Celsius(key as i16)
///     }
/// }
///
/// let mut temps = [Celsius(12), Celsius(-4), Celsius(7)];
/// sortkit::radix_sort(&mut temps);
/// assert_eq!(temps, [Celsius(-4), Celsius(7), Celsius(12)]);
/// ```
pub trait RadixKey: Copy {
    /// Widens the element into the sortable integer domain.
    fn to_radix(self) -> i64;

    /// Narrows a sorted key back into the element type.
    fn from_radix(key: i64) -> Self;
}

macro_rules! impl_radix_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RadixKey for $ty {
                #[inline(always)]
                fn to_radix(self) -> i64 {
                    self as i64
                }

                #[inline(always)]
                fn from_radix(key: i64) -> Self {
                    key as $ty
                }
            }
        )*
    };
}

// Every primitive integer whose full range fits in i64.
impl_radix_key!(i8, i16, i32, i64, isize, u8, u16, u32);

/// Linear normalizer mapping `[min, max]` onto `[0, 1]`.
///
/// Produces `(x - min) / (max - min)`, and `0.0` for every input when the span
/// is empty. Values outside the observed range map outside `[0, 1]`; bucket
/// sort clamps those.
///
/// # Examples
///
/// ```
/// use sortkit::core::UnitScale;
///
/// let scale = UnitScale::from_values([5.0, 4.0, 6.0, 2.0]).unwrap();
/// assert_eq!(scale.apply(2.0), 0.0);
/// assert_eq!(scale.apply(6.0), 1.0);
/// assert_eq!(scale.apply(4.0), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    min: f64,
    max: f64,
}

impl UnitScale {
    /// Creates a scale over an explicit range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Builds a scale from the smallest and largest finite values in `values`.
    ///
    /// Returns `None` if no finite value is present.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|x| x.is_finite())
            .fold(None, |acc, x| match acc {
                None => Some(Self::new(x, x)),
                Some(scale) => Some(Self::new(scale.min.min(x), scale.max.max(x))),
            })
    }

    /// Value mapped to `0.0`.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Value mapped to `1.0`.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Maps `x` into the unit interval.
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 { (x - self.min) / span } else { 0.0 }
    }
}

/// Rearranges `data` so that `data[i]` becomes the element previously at `order[i]`.
///
/// `order` must be a permutation of `0..data.len()`. Follows each cycle with
/// swaps, so elements are moved without requiring `Clone`.
pub(crate) fn apply_permutation<T>(data: &mut [T], mut order: Vec<usize>) {
    debug_assert_eq!(data.len(), order.len());
    for i in 0..data.len() {
        let mut current = i;
        while order[current] != i {
            let next = order[current];
            data.swap(current, next);
            order[current] = current; // Mark as placed
            current = next;
        }
        order[current] = current;
    }
}
