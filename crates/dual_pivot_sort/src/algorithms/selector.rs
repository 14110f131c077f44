use crate::{SortParams, SortStats};

use super::{common, dual_pivot_quick_sort, heap_sort, quick_sort_median3};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    HeapFallback,
    Insertion,
    SinglePivot,
    DualPivot,
}

/// Per-call state threaded through the recursion.
pub struct SortContext<F> {
    pub params: SortParams,
    pub is_less: F,
    pub stats: SortStats,
}

impl<F> SortContext<F> {
    pub fn new(params: SortParams, is_less: F) -> Self {
        Self {
            params,
            is_less,
            stats: SortStats::default(),
        }
    }
}

#[inline]
pub fn select(len: usize, depth: usize, params: &SortParams) -> Strategy {
    if depth > params.max_depth() {
        Strategy::HeapFallback
    } else if len < params.insertion_threshold() {
        Strategy::Insertion
    } else if len < params.quicksort_threshold() {
        Strategy::SinglePivot
    } else {
        Strategy::DualPivot
    }
}

pub fn sort_range<T, F>(data: &mut [T], depth: usize, ctx: &mut SortContext<F>)
where
    F: FnMut(&T, &T) -> bool,
{
    if data.len() < 2 {
        return;
    }
    let strategy = select(data.len(), depth, &ctx.params);
    run_strategy(data, strategy, depth, ctx);
}

/// Runs `strategy` on `data` regardless of what `select` would pick.
/// Partitioning strategies hand their subranges back to `sort_range`.
pub fn run_strategy<T, F>(
    data: &mut [T],
    strategy: Strategy,
    depth: usize,
    ctx: &mut SortContext<F>,
) where
    F: FnMut(&T, &T) -> bool,
{
    match strategy {
        Strategy::HeapFallback => {
            ctx.stats.fallbacks += 1;
            heap_sort::heap_sort(data, &mut ctx.is_less);
        }
        Strategy::Insertion => {
            ctx.stats.insertion_runs += 1;
            common::insertion_sort(data, &mut ctx.is_less);
        }
        Strategy::SinglePivot => quick_sort_median3::sort(data, depth, ctx),
        Strategy::DualPivot => dual_pivot_quick_sort::sort(data, depth, ctx),
    }
}
