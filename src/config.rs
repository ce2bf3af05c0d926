//! Tuning knobs for the sorting engine.

use crate::error::SortError;

/// Ranges with `hi - lo` at or below this are left to insertion sort by quicksort.
pub const QUICKSORT_THRESHOLD: usize = 7;

/// Ranges with `hi - lo` at or below this are insertion sorted by mergesort.
pub const MERGESORT_THRESHOLD: usize = 12;

/// Cutoffs at which both algorithms hand a range over to insertion sort.
///
/// # Examples
///
/// ```
/// use idxsort::{SortConfig, Sorter};
///
/// let config = SortConfig::default().with_mergesort_threshold(16);
/// let sorter = Sorter::new(config).unwrap();
///
/// let mut data = vec![3, 1, 2];
/// sorter.merge_sort(&mut data, 0, 3);
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    pub quicksort_threshold: usize,
    pub mergesort_threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            quicksort_threshold: QUICKSORT_THRESHOLD,
            mergesort_threshold: MERGESORT_THRESHOLD,
        }
    }
}

impl SortConfig {
    pub fn with_quicksort_threshold(mut self, threshold: usize) -> Self {
        self.quicksort_threshold = threshold;
        self
    }

    pub fn with_mergesort_threshold(mut self, threshold: usize) -> Self {
        self.mergesort_threshold = threshold;
        self
    }

    /// Checks that both thresholds are at least 1.
    ///
    /// A zero mergesort threshold would keep splitting a one-element range, and
    /// a zero quicksort threshold would partition a two-element range that has
    /// no room for the scan guards.
    pub fn validate(&self) -> Result<(), SortError> {
        if self.quicksort_threshold < 1 {
            return Err(SortError::InvalidThreshold {
                name: "quicksort_threshold",
                value: self.quicksort_threshold,
                min: 1,
            });
        }
        if self.mergesort_threshold < 1 {
            return Err(SortError::InvalidThreshold {
                name: "mergesort_threshold",
                value: self.mergesort_threshold,
                min: 1,
            });
        }
        Ok(())
    }
}
