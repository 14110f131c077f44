use super::common;
use super::selector::{self, SortContext};

pub fn sort<T, F>(data: &mut [T], depth: usize, ctx: &mut SortContext<F>)
where
    F: FnMut(&T, &T) -> bool,
{
    ctx.stats.record_partition(depth);
    ctx.stats.single_pivot_partitions += 1;

    let split = partition(data, &mut ctx.is_less);
    let (left, rest) = data.split_at_mut(split);
    selector::sort_range(left, depth + 1, ctx);
    selector::sort_range(&mut rest[1..], depth + 1, ctx);
}

/// Hoare partition around the median of three (short ranges) or the
/// pseudo-median of nine (64 elements and up).
///
/// The samples are compared in place and only the chosen pivot is moved, to
/// the front. Returns the pivot's final index `p`: everything in `[0, p)` is
/// `<=` the pivot and everything in `(p, len)` is `>=` it. Both cursors stop
/// on elements equal to the pivot, so runs of duplicates split evenly.
pub fn partition<T, F>(data: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    debug_assert!(len >= 3);

    let pivot = common::choose_pivot_ninther(data, is_less);
    data.swap(0, pivot);

    let last = len - 1;
    let mut i = 0usize;
    let mut j = len;
    loop {
        i += 1;
        while i < last && is_less(&data[i], &data[0]) {
            i += 1;
        }

        j -= 1;
        while j > 0 && is_less(&data[0], &data[j]) {
            j -= 1;
        }

        if i >= j {
            break;
        }
        data.swap(i, j);
    }

    data.swap(0, j);
    j
}
