use std::ops::Range;

use crate::MIN_DUAL_PIVOT_LEN;

use super::common;
use super::selector::{self, SortContext};

/// Layout of a range after `partition`.
///
/// With `p1 = data[pivot1]` and `p2 = data[pivot2]`:
/// - `[0, pivot1)` holds elements `< p1`,
/// - `[pivot1, pivot2]` holds elements in `[p1, p2]`,
/// - `(pivot2, len)` holds elements `> p2`.
///
/// `middle` is the part strictly between the pivots that still needs
/// sorting. After equal-key compaction, `(pivot1, middle.start)` is all
/// `== p1` and `[middle.end, pivot2)` is all `== p2`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DualPartition {
    pub pivot1: usize,
    pub pivot2: usize,
    pub middle: Range<usize>,
    pub distinct_pivots: bool,
    pub compacted: bool,
}

pub fn sort<T, F>(data: &mut [T], depth: usize, ctx: &mut SortContext<F>)
where
    F: FnMut(&T, &T) -> bool,
{
    ctx.stats.record_partition(depth);
    ctx.stats.dual_pivot_partitions += 1;

    let part = partition(data, &mut ctx.is_less);
    if part.compacted {
        ctx.stats.equal_compactions += 1;
    }

    selector::sort_range(&mut data[..part.pivot1], depth + 1, ctx);
    if part.distinct_pivots {
        selector::sort_range(&mut data[part.middle], depth + 1, ctx);
    } else {
        // Every element between equal pivots equals them.
        ctx.stats.middle_skips += 1;
    }
    selector::sort_range(&mut data[part.pivot2 + 1..], depth + 1, ctx);
}

pub fn partition<T, F>(data: &mut [T], is_less: &mut F) -> DualPartition
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    debug_assert!(len >= MIN_DUAL_PIVOT_LEN);

    let sixth = len / 6;
    let e1 = sixth;
    let e2 = e1 + sixth;
    let e3 = e2 + sixth;
    let e4 = e3 + sixth;
    let e5 = e4 + sixth;

    common::sort3(data, e1, e2, e3, is_less);
    common::sort3(data, e3, e4, e5, is_less);
    if is_less(&data[e4], &data[e2]) {
        data.swap(e2, e4);
    }

    let last = len - 1;
    data.swap(0, e2);
    data.swap(last, e4);

    // [1, less) < p1, [less, k) in [p1, p2], (great, last) > p2.
    let mut less = 1usize;
    let mut great = last - 1;
    let mut k = less;
    while k <= great {
        if is_less(&data[k], &data[0]) {
            data.swap(k, less);
            less += 1;
        } else if is_less(&data[last], &data[k]) {
            while k < great && is_less(&data[last], &data[great]) {
                great -= 1;
            }
            data.swap(k, great);
            great -= 1;
            if is_less(&data[k], &data[0]) {
                data.swap(k, less);
                less += 1;
            }
        }
        k += 1;
    }

    let pivot1 = less - 1;
    let pivot2 = great + 1;
    data.swap(0, pivot1);
    data.swap(last, pivot2);

    let distinct_pivots = is_less(&data[pivot1], &data[pivot2]);
    let mut middle = less..pivot2;
    let mut compacted = false;

    if distinct_pivots && less < e1 && e5 < great {
        middle = compact_equal_keys(data, pivot1, pivot2, is_less);
        compacted = true;
    }

    DualPartition {
        pivot1,
        pivot2,
        middle,
        distinct_pivots,
        compacted,
    }
}

/// Moves elements equal to either pivot out of `(pivot1, pivot2)` and
/// returns the range left between them.
fn compact_equal_keys<T, F>(
    data: &mut [T],
    pivot1: usize,
    pivot2: usize,
    is_less: &mut F,
) -> Range<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    // Inside the middle zone `!(p1 < x)` means `x == p1` and `!(x < p2)` means `x == p2`.
    let mut less = pivot1 + 1;
    let mut great = pivot2 - 1;
    let mut k = less;
    while k <= great {
        if !is_less(&data[pivot1], &data[k]) {
            data.swap(k, less);
            less += 1;
        } else if !is_less(&data[k], &data[pivot2]) {
            while k < great && !is_less(&data[great], &data[pivot2]) {
                great -= 1;
            }
            data.swap(k, great);
            great -= 1;
            if !is_less(&data[pivot1], &data[k]) {
                data.swap(k, less);
                less += 1;
            }
        }
        k += 1;
    }

    less..great + 1
}
