//! In-place, unstable, adaptive dual-pivot quicksort.
//!
//! Ranges are dispatched by length and recursion depth: short ranges go to
//! insertion sort, medium ranges to a median-of-three quicksort, long ranges
//! to a dual-pivot partitioner. Once recursion goes deeper than
//! [`SortParams::max_depth`] the remaining range is heap sorted, which caps
//! both the worst-case running time and the stack depth.
//!
//! The slice is exclusively borrowed for the duration of the call and no
//! memory is allocated.

mod algorithms;
mod params;

use std::cmp::Ordering;

use algorithms::selector::{self, SortContext, Strategy};

pub use params::{
    DEFAULT_PARAMS, MAX_DEPTH_LIMIT, MIN_DUAL_PIVOT_LEN, MIN_INSERTION_THRESHOLD, ParamsError,
    SortParams,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    HeapSort,
    SinglePivotQuickSort,
    DualPivotQuickSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 4] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::SinglePivotQuickSort,
    SortAlgorithm::DualPivotQuickSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::SinglePivotQuickSort => "single_pivot_quick_sort",
        SortAlgorithm::DualPivotQuickSort => "dual_pivot_quick_sort",
    }
}

/// Counters collected during one sort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    /// Deepest recursion level at which a partition ran. `None` if the whole
    /// input was handled without partitioning.
    pub max_partition_depth: Option<usize>,
    pub insertion_runs: usize,
    pub single_pivot_partitions: usize,
    pub dual_pivot_partitions: usize,
    /// Dual-pivot partitions whose pivots compared equal, so the middle part
    /// needed no further work.
    pub middle_skips: usize,
    /// Dual-pivot partitions that moved pivot-equal keys out of an oversized middle part.
    pub equal_compactions: usize,
    /// Ranges handed to heap sort after exceeding the depth limit.
    pub fallbacks: usize,
}

impl SortStats {
    #[inline]
    pub(crate) fn record_partition(&mut self, depth: usize) {
        self.max_partition_depth = Some(self.max_partition_depth.map_or(depth, |d| d.max(depth)));
    }

    pub fn partitions(&self) -> usize {
        self.single_pivot_partitions + self.dual_pivot_partitions
    }
}

/// Sorts `data` in ascending order.
///
/// Not stable: equal elements may be reordered.
///
/// ```
/// let mut v = [5, 3, 8, 1, 9, 2];
/// dual_pivot_sort::sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn sort<T: Ord>(data: &mut [T]) {
    sort_with_params(data, &DEFAULT_PARAMS);
}

/// Sorts `data` with a comparator. Panics raised by `compare` propagate;
/// the slice is then left as some permutation of its input.
pub fn sort_by<T, F>(data: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_params(data, &DEFAULT_PARAMS, compare);
}

pub fn sort_by_key<T, K, F>(data: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(data, |a, b| key(a).cmp(&key(b)));
}

pub fn sort_with_params<T: Ord>(data: &mut [T], params: &SortParams) -> SortStats {
    sort_by_with_params(data, params, T::cmp)
}

pub fn sort_by_with_params<T, F>(data: &mut [T], params: &SortParams, mut compare: F) -> SortStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut ctx = SortContext::new(*params, |a: &T, b: &T| compare(a, b) == Ordering::Less);
    selector::sort_range(data, 0, &mut ctx);
    ctx.stats
}

/// Runs one building block over the whole slice.
///
/// `DualPivotQuickSort` is the full adaptive sort; `SinglePivotQuickSort`
/// is the same dispatch with the dual-pivot stage disabled.
pub fn sort_by_algorithm<T: Ord>(algo: SortAlgorithm, data: &mut [T]) -> SortStats {
    let params = match algo {
        SortAlgorithm::SinglePivotQuickSort => DEFAULT_PARAMS.single_pivot_only(),
        _ => DEFAULT_PARAMS,
    };
    let mut ctx = SortContext::new(params, |a: &T, b: &T| a < b);

    match algo {
        SortAlgorithm::InsertionSort => {
            selector::run_strategy(data, Strategy::Insertion, 0, &mut ctx);
        }
        SortAlgorithm::HeapSort => {
            selector::run_strategy(data, Strategy::HeapFallback, 0, &mut ctx);
        }
        SortAlgorithm::SinglePivotQuickSort | SortAlgorithm::DualPivotQuickSort => {
            selector::sort_range(data, 0, &mut ctx);
        }
    }

    ctx.stats
}
