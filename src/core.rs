//! Core traits and adapters for idxsort.
//!
//! This module defines:
//! - [`Sortable`]: The two-primitive contract (`compare` and `swap`) users implement.
//! - [`TrySortable`]: The fallible form of the same contract. Every `Sortable` is one.
//! - Storage adapters: slices, `Vec`, `VecDeque`, [`SortBy`], [`ParallelSorter`],
//!   [`Checked`] and [`Counting`].

use crate::error::SortError;
use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::convert::Infallible;

/// An index-addressable collection that can be sorted through positions alone.
///
/// The engine never reads or moves element values itself. It only asks which
/// of two positions holds the smaller element and tells the collection to
/// exchange two positions.
///
/// `compare` must be a consistent total order for the duration of one sort call,
/// and `swap` must be its own inverse. Out-of-range indices are a caller error;
/// implementations are expected to panic the way slice indexing does.
///
/// # Examples
///
/// Sorting two arrays that live side by side, keyed on the first:
///
/// ```
/// use idxsort::{merge_sort, Sortable};
/// use std::cmp::Ordering;
///
/// struct Table {
///     ids: Vec<u32>,
///     names: Vec<&'static str>,
/// }
///
/// impl Sortable for Table {
///     fn compare(&self, i: usize, j: usize) -> Ordering {
///         self.ids[i].cmp(&self.ids[j])
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.ids.swap(i, j);
///         self.names.swap(i, j);
///     }
/// }
///
/// let mut table = Table {
///     ids: vec![3, 1, 2],
///     names: vec!["c", "a", "b"],
/// };
/// merge_sort(&mut table, 0, 3);
///
/// assert_eq!(table.names, vec!["a", "b", "c"]);
/// ```
pub trait Sortable {
    /// Three-way comparison of the elements at positions `i` and `j`.
    fn compare(&self, i: usize, j: usize) -> Ordering;

    /// Exchanges the elements at positions `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

/// A collection whose primitives may fail.
///
/// The engine stops at the first error and returns it unchanged. The collection
/// is left as a permutation of its input, since only completed swaps took effect.
pub trait TrySortable {
    type Error;

    fn try_compare(&self, i: usize, j: usize) -> Result<Ordering, Self::Error>;

    fn try_swap(&mut self, i: usize, j: usize) -> Result<(), Self::Error>;
}

impl<S: Sortable + ?Sized> TrySortable for S {
    type Error = Infallible;

    #[inline(always)]
    fn try_compare(&self, i: usize, j: usize) -> Result<Ordering, Infallible> {
        Ok(self.compare(i, j))
    }

    #[inline(always)]
    fn try_swap(&mut self, i: usize, j: usize) -> Result<(), Infallible> {
        self.swap(i, j);
        Ok(())
    }
}

impl<S: Sortable + ?Sized> Sortable for &mut S {
    #[inline(always)]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        (**self).compare(i, j)
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }
}

impl<T: Ord> Sortable for [T] {
    #[inline(always)]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self[i].cmp(&self[j])
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T: Ord> Sortable for Vec<T> {
    #[inline(always)]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self[i].cmp(&self[j])
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }
}

// VecDeque provides O(1) random access and swap, which is all the engine needs.
impl<T: Ord> Sortable for VecDeque<T> {
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self[i].cmp(&self[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j)
    }
}

/// A slice ordered by a caller-supplied comparator instead of `Ord`.
///
/// # Examples
///
/// ```
/// use idxsort::{merge_sort, SortBy};
///
/// let mut words = vec!["ccc", "a", "bb"];
/// merge_sort(&mut SortBy::new(&mut words, |a: &&str, b: &&str| a.len().cmp(&b.len())), 0, 3);
///
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub struct SortBy<'a, T, F> {
    data: &'a mut [T],
    cmp: F,
}

impl<'a, T, F> SortBy<'a, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(data: &'a mut [T], cmp: F) -> Self {
        Self { data, cmp }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T, F> Sortable for SortBy<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        (self.cmp)(&self.data[i], &self.data[j])
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j)
    }
}

/// A companion array that follows the permutation applied to a key array.
pub trait Column {
    /// Returns the number of elements in the column.
    fn len(&self) -> usize;

    /// Returns `true` if the column has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchanges the elements at positions `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

impl<T> Column for &mut [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}

impl<T> Column for &mut Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }
}

/// Sorts a key array and permutes any number of companion columns in lockstep.
///
/// # Examples
///
/// ```
/// use idxsort::ParallelSorter;
///
/// let mut ages = vec![41, 23, 35];
/// let mut names = vec!["ann", "bob", "cid"];
///
/// ParallelSorter::new(&mut ages)
///     .with_column(&mut names)
///     .unwrap()
///     .merge_sort();
///
/// assert_eq!(ages, vec![23, 35, 41]);
/// assert_eq!(names, vec!["bob", "cid", "ann"]);
/// ```
pub struct ParallelSorter<'a, K> {
    keys: &'a mut [K],
    columns: Vec<Box<dyn Column + 'a>>,
}

impl<'a, K: Ord> ParallelSorter<'a, K> {
    pub fn new(keys: &'a mut [K]) -> Self {
        Self {
            keys,
            columns: Vec::new(),
        }
    }

    /// Attaches a column. Fails if its length differs from the key array's.
    pub fn with_column<C: Column + 'a>(mut self, column: C) -> Result<Self, SortError> {
        if column.len() != self.keys.len() {
            return Err(SortError::LengthMismatch {
                expected: self.keys.len(),
                got: column.len(),
            });
        }
        self.columns.push(Box::new(column));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Sorts every row by key with the hybrid quicksort. Rows with equal keys
    /// may end up in any order.
    pub fn quick_sort(&mut self) {
        if let Some(hi) = self.len().checked_sub(1) {
            crate::algo::quick_sort(self, 0, hi);
        }
    }

    /// Sorts every row by key with the stable merge sort.
    pub fn merge_sort(&mut self) {
        let len = self.len();
        crate::algo::merge_sort(self, 0, len);
    }
}

impl<K: Ord> Sortable for ParallelSorter<'_, K> {
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self.keys[i].cmp(&self.keys[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.keys.swap(i, j);
        for column in self.columns.iter_mut() {
            column.swap(i, j);
        }
    }
}

/// Bounds-checks every primitive call against a declared length.
///
/// Out-of-range positions are reported as [`SortError::IndexOutOfBounds`]
/// instead of reaching the wrapped collection.
///
/// # Examples
///
/// ```
/// use idxsort::{try_quick_sort, Checked, SortError};
///
/// let mut data = vec![3, 1, 2];
/// let mut checked = Checked::new(&mut data, 3);
///
/// assert_eq!(
///     try_quick_sort(&mut checked, 0, 3),
///     Err(SortError::IndexOutOfBounds { index: 3, len: 3 })
/// );
/// ```
#[derive(Debug)]
pub struct Checked<S> {
    inner: S,
    len: usize,
}

impl<S> Checked<S> {
    pub fn new(inner: S, len: usize) -> Self {
        Self { inner, len }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    #[inline(always)]
    fn check(&self, index: usize) -> Result<(), SortError> {
        if index < self.len {
            Ok(())
        } else {
            Err(SortError::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<S: Sortable> TrySortable for Checked<S> {
    type Error = SortError;

    fn try_compare(&self, i: usize, j: usize) -> Result<Ordering, SortError> {
        self.check(i)?;
        self.check(j)?;
        Ok(self.inner.compare(i, j))
    }

    fn try_swap(&mut self, i: usize, j: usize) -> Result<(), SortError> {
        self.check(i)?;
        self.check(j)?;
        self.inner.swap(i, j);
        Ok(())
    }
}

/// Number of primitive calls observed by [`Counting`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    pub compares: usize,
    pub swaps: usize,
}

/// Counts the `compare` and `swap` calls the engine makes on a collection.
///
/// # Examples
///
/// ```
/// use idxsort::{merge_sort, Counting};
///
/// let mut data = vec![1, 2, 3, 4];
/// let mut counting = Counting::new(&mut data);
/// merge_sort(&mut counting, 0, 4);
///
/// assert_eq!(counting.stats().swaps, 0);
/// ```
#[derive(Debug)]
pub struct Counting<S> {
    inner: S,
    compares: Cell<usize>,
    swaps: usize,
}

impl<S> Counting<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            compares: Cell::new(0),
            swaps: 0,
        }
    }

    pub fn stats(&self) -> SortStats {
        SortStats {
            compares: self.compares.get(),
            swaps: self.swaps,
        }
    }

    pub fn reset(&mut self) {
        self.compares.set(0);
        self.swaps = 0;
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sortable> Sortable for Counting<S> {
    #[inline(always)]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self.compares.set(self.compares.get() + 1);
        self.inner.compare(i, j)
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.swaps += 1;
        self.inner.swap(i, j)
    }
}
