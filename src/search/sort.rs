//! In-place quicksort over ranked candidates
//!
//! Lomuto partition with the last element as pivot. Recursion is replaced
//! by an explicit stack of pending ranges; the smaller side is always
//! processed next, which keeps the stack at `O(log n)` entries even for
//! sorted or reverse-sorted input.

use super::candidate::Candidate;

/// Sort candidates by ascending distance, ties broken by original index
pub fn sort_by_distance(items: &mut [Candidate]) {
    let mut pending: Vec<(usize, usize)> = Vec::new();
    if items.len() > 1 {
        pending.push((0, items.len() - 1));
    }

    while let Some((mut low, mut high)) = pending.pop() {
        while low < high {
            let pivot = partition(items, low, high);

            let left_len = pivot - low;
            let right_len = high - pivot;

            if left_len < right_len {
                if pivot + 1 < high {
                    pending.push((pivot + 1, high));
                }
                if pivot == low {
                    break;
                }
                high = pivot - 1;
            } else {
                if pivot > low + 1 {
                    pending.push((low, pivot - 1));
                }
                low = pivot + 1;
            }
        }
    }
}

/// Partition `items[low..=high]` around `items[high]`, returning the pivot's final slot
fn partition(items: &mut [Candidate], low: usize, high: usize) -> usize {
    let pivot = items[high].sort_key();
    let mut store = low;
    for i in low..high {
        if items[i].sort_key() < pivot {
            items.swap(store, i);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}
