//! Sorting algorithms driven entirely by index `compare` and `swap`.
//!
//! Two independent entry points share a handful of primitives:
//! - **Hybrid Quicksort** ([`quick_sort`]): median-of-three pivot, Hoare partition,
//!   recursion into the smaller side only, and one insertion sort pass at the end.
//!   Sorts the *inclusive* range `[lo, hi]`. Not stable.
//! - **In-place Merge Sort** ([`merge_sort`]): recursive halving with insertion sort
//!   for small ranges, merged without a buffer by binary-search cut points and block
//!   rotation. Sorts the *half-open* range `[lo, hi)`. Stable.
//!
//! Every routine is written against [`TrySortable`], so an error raised by the
//! caller's primitives stops the sort and is returned as is.

use crate::config::SortConfig;
use crate::core::{Sortable, SortBy, TrySortable};
use crate::error::SortError;
use log::{debug, trace};
use std::cmp::Ordering;
use std::convert::Infallible;

/// The sorting engine, parameterized by its insertion sort thresholds.
///
/// The free functions in this module use `Sorter::default()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sorter {
    config: SortConfig,
}

impl Sorter {
    /// Creates a sorter after validating `config`.
    pub fn new(config: SortConfig) -> Result<Self, SortError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sorts the inclusive range `[lo, hi]` with the hybrid quicksort.
    pub fn quick_sort<S: Sortable + ?Sized>(&self, data: &mut S, lo: usize, hi: usize) {
        into_ok(self.try_quick_sort(data, lo, hi))
    }

    /// Sorts the half-open range `[lo, hi)` with the stable in-place merge sort.
    pub fn merge_sort<S: Sortable + ?Sized>(&self, data: &mut S, lo: usize, hi: usize) {
        into_ok(self.try_merge_sort(data, lo, hi))
    }

    /// Fallible form of [`Sorter::quick_sort`].
    pub fn try_quick_sort<S: TrySortable + ?Sized>(
        &self,
        data: &mut S,
        lo: usize,
        hi: usize,
    ) -> Result<(), S::Error> {
        if hi <= lo {
            return Ok(());
        }
        debug!("quick_sort [{}, {}]", lo, hi);

        quick_sort_partitions(data, lo, hi, self.config.quicksort_threshold)?;
        // Every element now sits within the threshold of its final slot.
        insertion_sort(data, lo, hi)
    }

    /// Fallible form of [`Sorter::merge_sort`].
    pub fn try_merge_sort<S: TrySortable + ?Sized>(
        &self,
        data: &mut S,
        lo: usize,
        hi: usize,
    ) -> Result<(), S::Error> {
        if hi <= lo {
            return Ok(());
        }
        debug!("merge_sort [{}, {})", lo, hi);

        merge_sort_range(data, lo, hi, self.config.mergesort_threshold)
    }
}

/// Sorts the inclusive range `[lo, hi]` of `data` with the hybrid quicksort.
///
/// Elements that compare equal may be reordered.
///
/// # Examples
///
/// ```
/// use idxsort::quick_sort;
///
/// let mut data = vec![5, 3, 9, 1];
/// quick_sort(&mut data, 0, 3);
///
/// assert_eq!(data, vec![1, 3, 5, 9]);
/// ```
pub fn quick_sort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    Sorter::default().quick_sort(data, lo, hi)
}

/// Sorts the half-open range `[lo, hi)` of `data` with the stable in-place merge sort.
///
/// Elements that compare equal keep their relative order. No auxiliary buffer is allocated.
///
/// # Examples
///
/// ```
/// use idxsort::merge_sort;
///
/// let mut data = vec![5, 3, 9, 1];
/// merge_sort(&mut data, 0, 4);
///
/// assert_eq!(data, vec![1, 3, 5, 9]);
/// ```
pub fn merge_sort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    Sorter::default().merge_sort(data, lo, hi)
}

/// Fallible form of [`quick_sort`].
pub fn try_quick_sort<S: TrySortable + ?Sized>(
    data: &mut S,
    lo: usize,
    hi: usize,
) -> Result<(), S::Error> {
    Sorter::default().try_quick_sort(data, lo, hi)
}

/// Fallible form of [`merge_sort`].
pub fn try_merge_sort<S: TrySortable + ?Sized>(
    data: &mut S,
    lo: usize,
    hi: usize,
) -> Result<(), S::Error> {
    Sorter::default().try_merge_sort(data, lo, hi)
}

/// Sorts a whole slice with the hybrid quicksort using `cmp`.
pub fn sort_unstable_by<T, F>(data: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    if let Some(hi) = data.len().checked_sub(1) {
        quick_sort(&mut SortBy::new(data, cmp), 0, hi);
    }
}

/// Sorts a whole slice with the stable merge sort using `cmp`.
///
/// # Examples
///
/// ```
/// use idxsort::sort_stable_by;
///
/// let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// sort_stable_by(&mut pairs, |a, b| a.0.cmp(&b.0));
///
/// assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn sort_stable_by<T, F>(data: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = data.len();
    merge_sort(&mut SortBy::new(data, cmp), 0, len);
}

fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Partitions `[lo, hi]` until every remaining sub-range is at most `threshold`
/// wide. Recurses into the smaller side and loops on the larger one, so the stack
/// depth stays O(log N).
fn quick_sort_partitions<S: TrySortable + ?Sized>(
    data: &mut S,
    mut lo: usize,
    mut hi: usize,
    threshold: usize,
) -> Result<(), S::Error> {
    while hi - lo > threshold {
        let (left_end, right_start) = partition(data, lo, hi)?;

        if left_end - lo < hi + 1 - right_start {
            quick_sort_partitions(data, lo, left_end, threshold)?;
            lo = right_start;
        } else {
            quick_sort_partitions(data, right_start, hi, threshold)?;
            hi = left_end;
        }
    }
    Ok(())
}

/// Median-of-three pivot selection followed by a Hoare partition of `[lo, hi]`.
///
/// Requires `hi - lo >= 2`. Returns `(left_end, right_start)`: afterwards every
/// element in `[lo, left_end]` is no greater than the pivot and every element in
/// `[right_start, hi]` is no less than it. The pivot sits between the two.
fn partition<S: TrySortable + ?Sized>(
    data: &mut S,
    lo: usize,
    hi: usize,
) -> Result<(usize, usize), S::Error> {
    let mid = lo + (hi - lo) / 2;
    if data.try_compare(lo, mid)?.is_gt() {
        data.try_swap(lo, mid)?;
    }
    if data.try_compare(lo, hi)?.is_gt() {
        data.try_swap(lo, hi)?;
    }
    if data.try_compare(mid, hi)?.is_gt() {
        data.try_swap(mid, hi)?;
    }

    // `lo` now guards the right scan and the pivot at `hi - 1` guards the left one.
    let pivot = hi - 1;
    data.try_swap(mid, pivot)?;

    let mut i = lo;
    let mut j = pivot;
    loop {
        i += 1;
        while data.try_compare(i, pivot)?.is_lt() {
            i += 1;
        }
        j -= 1;
        while data.try_compare(j, pivot)?.is_gt() {
            j -= 1;
        }
        if j < i {
            break;
        }
        data.try_swap(i, j)?;
    }
    data.try_swap(i, pivot)?;

    Ok((j, i + 1))
}

/// Adjacent-exchange insertion sort of the inclusive range `[lo, hi]`. Stable.
fn insertion_sort<S: TrySortable + ?Sized>(
    data: &mut S,
    lo: usize,
    hi: usize,
) -> Result<(), S::Error> {
    for i in lo + 1..=hi {
        let mut j = i;
        while j > lo && data.try_compare(j - 1, j)?.is_gt() {
            data.try_swap(j - 1, j)?;
            j -= 1;
        }
    }
    Ok(())
}

fn merge_sort_range<S: TrySortable + ?Sized>(
    data: &mut S,
    lo: usize,
    hi: usize,
    threshold: usize,
) -> Result<(), S::Error> {
    let len = hi - lo;
    if len <= threshold {
        if len > 1 {
            trace!("insertion_sort [{}, {})", lo, hi);
            insertion_sort(data, lo, hi - 1)?;
        }
        return Ok(());
    }

    let mid = lo + len / 2;
    merge_sort_range(data, lo, mid, threshold)?;
    merge_sort_range(data, mid, hi, threshold)?;
    merge(data, lo, mid, hi, mid - lo, hi - mid)
}

/// Merges the sorted runs `[lo, pivot)` and `[pivot, hi)` in place.
///
/// The longer run is cut at its midpoint and the matching cut in the other run is
/// found by binary search. Ties stay on the left run's side, which keeps the merge
/// stable. Rotating the block between the cuts leaves two smaller independent merges.
fn merge<S: TrySortable + ?Sized>(
    data: &mut S,
    lo: usize,
    pivot: usize,
    hi: usize,
    len1: usize,
    len2: usize,
) -> Result<(), S::Error> {
    if len1 == 0 || len2 == 0 {
        return Ok(());
    }
    if len1 + len2 == 2 {
        if data.try_compare(pivot, lo)?.is_lt() {
            data.try_swap(pivot, lo)?;
        }
        return Ok(());
    }

    let (first_cut, second_cut) = if len1 > len2 {
        let first_cut = lo + len1 / 2;
        (first_cut, lower_bound(data, pivot, hi, first_cut)?)
    } else {
        let second_cut = pivot + len2 / 2;
        (upper_bound(data, lo, pivot, second_cut)?, second_cut)
    };
    let len11 = first_cut - lo;
    let len22 = second_cut - pivot;

    rotate(data, first_cut, pivot, second_cut)?;

    let new_mid = first_cut + len22;
    merge(data, lo, first_cut, new_mid, len11, len22)?;
    merge(data, new_mid, second_cut, hi, len1 - len11, len2 - len22)
}

/// Exchanges the adjacent blocks `[lo, mid)` and `[mid, hi)` with three reversals.
fn rotate<S: TrySortable + ?Sized>(
    data: &mut S,
    lo: usize,
    mid: usize,
    hi: usize,
) -> Result<(), S::Error> {
    if lo == mid || mid == hi {
        return Ok(());
    }
    reverse(data, lo, mid)?;
    reverse(data, mid, hi)?;
    reverse(data, lo, hi)
}

fn reverse<S: TrySortable + ?Sized>(
    data: &mut S,
    mut lo: usize,
    mut hi: usize,
) -> Result<(), S::Error> {
    while lo + 1 < hi {
        hi -= 1;
        data.try_swap(lo, hi)?;
        lo += 1;
    }
    Ok(())
}

/// First position in the sorted range `[lo, hi)` whose element is not less than
/// the element at `val`.
fn lower_bound<S: TrySortable + ?Sized>(
    data: &S,
    mut lo: usize,
    hi: usize,
    val: usize,
) -> Result<usize, S::Error> {
    let mut len = hi - lo;
    while len > 0 {
        let half = len / 2;
        let mid = lo + half;
        if data.try_compare(mid, val)?.is_lt() {
            lo = mid + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    Ok(lo)
}

/// First position in the sorted range `[lo, hi)` whose element is strictly greater
/// than the element at `val`.
fn upper_bound<S: TrySortable + ?Sized>(
    data: &S,
    mut lo: usize,
    hi: usize,
    val: usize,
) -> Result<usize, S::Error> {
    let mut len = hi - lo;
    while len > 0 {
        let half = len / 2;
        let mid = lo + half;
        if data.try_compare(val, mid)?.is_lt() {
            len = half;
        } else {
            lo = mid + 1;
            len -= half + 1;
        }
    }
    Ok(lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok<T>(result: Result<T, Infallible>) -> T {
        into_ok(result)
    }

    #[test]
    fn test_bounds_on_run_of_ties() {
        // The probe value lives at index 6, outside the searched range.
        let data = vec![1, 2, 2, 2, 3, 4, 2];

        assert_eq!(ok(lower_bound(&data, 0, 6, 6)), 1);
        assert_eq!(ok(upper_bound(&data, 0, 6, 6)), 4);
    }

    #[test]
    fn test_bounds_at_range_edges() {
        let data = vec![5, 6, 7, 0, 9];

        assert_eq!(ok(lower_bound(&data, 0, 3, 3)), 0);
        assert_eq!(ok(upper_bound(&data, 0, 3, 3)), 0);
        assert_eq!(ok(lower_bound(&data, 0, 3, 4)), 3);
        assert_eq!(ok(upper_bound(&data, 0, 3, 4)), 3);
        assert_eq!(ok(lower_bound(&data, 2, 2, 4)), 2);
    }

    #[test]
    fn test_rotate_unequal_blocks() {
        let mut data = vec![0, 1, 2, 3, 4, 5, 6];
        ok(rotate(&mut data, 1, 3, 6));
        assert_eq!(data, vec![0, 3, 4, 5, 1, 2, 6]);
    }

    #[test]
    fn test_rotate_empty_block_is_noop() {
        let mut data = vec![3, 2, 1];
        ok(rotate(&mut data, 0, 0, 3));
        ok(rotate(&mut data, 0, 3, 3));
        assert_eq!(data, vec![3, 2, 1]);
    }

    #[test]
    fn test_merge_two_runs() {
        let mut data = vec![1, 4, 7, 8, 2, 3, 5, 6, 9];
        ok(merge(&mut data, 0, 4, 9, 4, 5));
        assert_eq!(data, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_partition_splits_around_pivot() {
        let mut data = vec![9, 4, 7, 1, 8, 2, 6, 3, 5, 0];
        let (left_end, right_start) = ok(partition(&mut data, 0, 9));

        let pivot = data[right_start - 1];
        assert!(data[..=left_end].iter().all(|&x| x <= pivot));
        assert!(data[right_start..].iter().all(|&x| x >= pivot));
    }

    #[test]
    fn test_insertion_sort_subrange_only() {
        let mut data = vec![9, 3, 2, 1, 0];
        ok(insertion_sort(&mut data, 1, 3));
        assert_eq!(data, vec![9, 1, 2, 3, 0]);
    }
}
