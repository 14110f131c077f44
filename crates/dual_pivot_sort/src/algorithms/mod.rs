pub mod common;
pub mod dual_pivot_quick_sort;
pub mod heap_sort;
pub mod quick_sort_median3;
pub mod selector;
