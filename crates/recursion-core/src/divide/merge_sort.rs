//! Top-down stable merge sort.
//!
//! The two halves are disjoint `split_at_mut` views of one buffer, and every
//! merge reuses the same scratch vector for the left half. No sub-vectors are
//! built on the way down.

use std::cmp::Ordering;
use tracing::{debug, trace};

/// Work done by one sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of merge steps; always `len - 1` for a non-empty input.
    pub merges: usize,
    /// Deepest recursion level reached (0 for the top-level call).
    pub max_depth: usize,
}

/// Sorted copy of `items`, ascending. Equal elements keep their input order.
///
/// ```
/// use recursion_core::merge_sort;
/// assert_eq!(merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
/// ```
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    merge_sort_by(items, T::cmp)
}

/// Sorted copy of `items` under `compare`. Stable.
pub fn merge_sort_by<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    sort_with(&mut sorted, compare);
    sorted
}

/// Sort `items` in place, ascending and stable.
pub fn merge_sort_in_place<T: Ord + Clone>(items: &mut [T]) {
    sort_with(items, T::cmp);
}

/// Sorted copy of `items` together with the merge count and recursion depth.
pub fn merge_sort_with_stats<T: Ord + Clone>(items: &[T]) -> (Vec<T>, SortStats) {
    let mut sorted = items.to_vec();
    let stats = sort_with(&mut sorted, T::cmp);
    (sorted, stats)
}

fn sort_with<T, F>(items: &mut [T], mut compare: F) -> SortStats
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut scratch = Vec::with_capacity(items.len() / 2 + 1);
    let mut stats = SortStats::default();
    sort_span(items, &mut scratch, &mut compare, &mut stats, 0);
    debug!(
        len = items.len(),
        merges = stats.merges,
        max_depth = stats.max_depth,
        "merge sort"
    );
    stats
}

fn sort_span<T, F>(
    items: &mut [T],
    scratch: &mut Vec<T>,
    compare: &mut F,
    stats: &mut SortStats,
    depth: usize,
) where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    stats.max_depth = stats.max_depth.max(depth);
    if items.len() <= 1 {
        return;
    }

    let mid = items.len() / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        sort_span(left, scratch, compare, stats, depth + 1);
        sort_span(right, scratch, compare, stats, depth + 1);
    }
    trace!(len = items.len(), mid, depth, "merge");
    merge(items, mid, scratch, compare);
    stats.merges += 1;
}

/// Merge the sorted runs `items[..mid]` and `items[mid..]`.
///
/// The left run is copied to `scratch`; output is written from the front of
/// `items`. The write cursor always trails the right-run cursor, so an unread
/// right element is never overwritten. Ties take the left element.
fn merge<T, F>(items: &mut [T], mid: usize, scratch: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    scratch.clear();
    scratch.extend_from_slice(&items[..mid]);

    let (mut left, mut right, mut out) = (0, mid, 0);
    while left < scratch.len() && right < items.len() {
        if compare(&items[right], &scratch[left]) == Ordering::Less {
            items.swap(out, right);
            right += 1;
        } else {
            items[out] = scratch[left].clone();
            left += 1;
        }
        out += 1;
    }

    // Leftover right elements are already in place.
    for value in scratch.drain(left..) {
        items[out] = value;
        out += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence() {
        let sorted = merge_sort(&[8, 4, 1, 6, 5, 9, 2, 0, 3]);
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5, 6, 8, 9]);
    }

    #[test]
    fn test_trivial_inputs() {
        let empty: [u8; 0] = [];
        assert!(merge_sort(&empty).is_empty());
        assert_eq!(merge_sort(&[7]), vec![7]);
    }

    #[test]
    fn test_merge_count() {
        for len in 1..40 {
            let items: Vec<i32> = (0..len).rev().collect();
            let (sorted, stats) = merge_sort_with_stats(&items);
            assert_eq!(stats.merges, len as usize - 1);
            assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        }
        let (_, stats) = merge_sort_with_stats::<i32>(&[]);
        assert_eq!(stats.merges, 0);
    }

    #[test]
    fn test_depth_is_logarithmic() {
        let items: Vec<u32> = (0..1024).collect();
        let (_, stats) = merge_sort_with_stats(&items);
        assert_eq!(stats.max_depth, 10);
    }

    #[test]
    fn test_stable_on_ties() {
        let pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
        let sorted = merge_sort_by(&pairs, |x, y| x.0.cmp(&y.0));
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]);
    }

    #[test]
    fn test_in_place_and_idempotent() {
        let mut words = vec!["pear", "fig", "apple", "kiwi", "date"];
        merge_sort_in_place(&mut words);
        assert_eq!(words, vec!["apple", "date", "fig", "kiwi", "pear"]);
        assert_eq!(merge_sort(&words), words);
    }

    #[test]
    fn test_descending_comparator() {
        let sorted = merge_sort_by(&[3, 9, 1, 4], |a, b| b.cmp(a));
        assert_eq!(sorted, vec![9, 4, 3, 1]);
    }
}
