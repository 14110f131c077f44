/// Shift-based insertion sort.
///
/// An element that is not smaller than its predecessor is already in place,
/// so the outer loop skips it without touching the slice.
#[inline]
pub fn insertion_sort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        if !is_less(&data[i], &data[i - 1]) {
            continue;
        }

        let mut j = i - 1;
        while j > 0 && is_less(&data[i], &data[j - 1]) {
            j -= 1;
        }
        data[j..=i].rotate_right(1);
    }
}

/// Orders `data[a] <= data[b] <= data[c]` with at most three swaps.
#[inline]
pub fn sort3<T, F>(data: &mut [T], a: usize, b: usize, c: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&data[b], &data[a]) {
        data.swap(a, b);
    }
    if is_less(&data[c], &data[b]) {
        data.swap(b, c);
        if is_less(&data[b], &data[a]) {
            data.swap(a, b);
        }
    }
}

/// Index of the median of `data[a]`, `data[b]` and `data[c]`. Leaves the slice untouched.
#[inline]
pub fn median3_index<T, F>(data: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&data[a], &data[b]) {
        if is_less(&data[b], &data[c]) {
            b
        } else if is_less(&data[a], &data[c]) {
            c
        } else {
            a
        }
    } else if is_less(&data[a], &data[c]) {
        a
    } else if is_less(&data[b], &data[c]) {
        c
    } else {
        b
    }
}

/// Pivot index: median of three below 64 elements, pseudo-median of nine above.
#[inline]
pub fn choose_pivot_ninther<T, F>(data: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    debug_assert!(len >= 3);
    let last = len - 1;
    let mid = len / 2;
    if len < 64 {
        return median3_index(data, 0, mid, last, is_less);
    }

    let step = len / 8;
    let m1 = median3_index(data, 0, step, step * 2, is_less);
    let m2 = median3_index(data, mid - step, mid, mid + step, is_less);
    let m3 = median3_index(data, last - step * 2, last - step, last, is_less);
    median3_index(data, m1, m2, m3, is_less)
}
