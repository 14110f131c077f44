/// In-place heap sort, ascending under `is_less`.
pub fn heap_sort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    build_max_heap(data, is_less);
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(&mut data[..end], 0, is_less);
    }
}

/// Rearranges `data` so every parent is not less than its children.
fn build_max_heap<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for node in (0..data.len() / 2).rev() {
        sift_down(data, node, is_less);
    }
}

/// Moves `data[node]` down until it dominates both children. The heap is the
/// whole of `heap`.
fn sift_down<T, F>(heap: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = heap.len();
    loop {
        let left = 2 * node + 1;
        if left >= len {
            return;
        }

        let right = left + 1;
        let larger = if right < len && is_less(&heap[left], &heap[right]) {
            right
        } else {
            left
        };
        if !is_less(&heap[node], &heap[larger]) {
            return;
        }

        heap.swap(node, larger);
        node = larger;
    }
}
