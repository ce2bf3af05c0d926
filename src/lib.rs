//! # idxsort
//!
//! `idxsort` is a storage-agnostic sorting engine. It sorts any index-addressable
//! collection using exactly two primitives supplied by the caller: `compare(i, j)` and
//! `swap(i, j)`. The engine never reads or copies element values, so the same code sorts
//! plain slices, several arrays kept in lockstep, or opaque external tables.
//!
//! ## Algorithms
//!
//! - **Hybrid Quicksort** ([`quick_sort`]): in-place, **not stable**, average O(N log N).
//!   Median-of-three pivot, Hoare partition, recursion bounded to O(log N) depth, and a
//!   final insertion sort pass. Takes an *inclusive* range `[lo, hi]`.
//! - **In-place Merge Sort** ([`merge_sort`]): **stable**, no auxiliary buffer,
//!   O(N log² N). Merges by binary-search cut points and three-reversal block rotation.
//!   Takes a *half-open* range `[lo, hi)`.
//!
//! The two interval conventions differ on purpose; there is no algorithm auto-selection.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! Slices, `Vec` and `VecDeque` of `Ord` elements work out of the box.
//!
//! ```rust
//! use idxsort::{merge_sort, quick_sort};
//!
//! let mut data = vec![5, 3, 3, 1, 4];
//! merge_sort(&mut data, 0, 5);
//! assert_eq!(data, vec![1, 3, 3, 4, 5]);
//!
//! let mut data = vec![9, 8, 7];
//! quick_sort(&mut data, 0, 2);
//! assert_eq!(data, vec![7, 8, 9]);
//! ```
//!
//! ### Custom Storage
//!
//! Implement [`Sortable`] to sort any structure that can answer "which of `i`, `j` is
//! smaller?" and "exchange `i` and `j`".
//!
//! ```rust
//! use idxsort::{quick_sort, Sortable};
//! use std::cmp::Ordering;
//!
//! // Points stored as separate coordinate arrays, sorted by x.
//! struct Points {
//!     xs: Vec<f64>,
//!     ys: Vec<f64>,
//! }
//!
//! impl Sortable for Points {
//!     fn compare(&self, i: usize, j: usize) -> Ordering {
//!         self.xs[i].total_cmp(&self.xs[j])
//!     }
//!
//!     fn swap(&mut self, i: usize, j: usize) {
//!         self.xs.swap(i, j);
//!         self.ys.swap(i, j);
//!     }
//! }
//!
//! let mut points = Points {
//!     xs: vec![2.0, 0.5, 1.0],
//!     ys: vec![20.0, 5.0, 10.0],
//! };
//! quick_sort(&mut points, 0, 2);
//!
//! assert_eq!(points.ys, vec![5.0, 10.0, 20.0]);
//! ```
//!
//! ### Fallible Primitives
//!
//! Implement [`TrySortable`] when `compare` or `swap` can fail. The first error stops the
//! sort and is returned unchanged by [`try_quick_sort`] / [`try_merge_sort`].
//!
//! ## Logging
//!
//! Entry points emit `debug` records and small-range fallbacks emit `trace` records through
//! the [`log`](https://docs.rs/log) facade. Install any logger to see them.

pub mod algo;
pub mod config;
pub mod core;
pub mod error;

pub use crate::algo::{
    Sorter, merge_sort, quick_sort, sort_stable_by, sort_unstable_by, try_merge_sort,
    try_quick_sort,
};
pub use crate::config::SortConfig;
pub use crate::core::{
    Checked, Column, Counting, ParallelSorter, SortBy, SortStats, Sortable, TrySortable,
};
pub use crate::error::SortError;

pub mod prelude {
    pub use crate::algo::{merge_sort, quick_sort, try_merge_sort, try_quick_sort};
    pub use crate::core::{Sortable, TrySortable};
}
