//! Recursive binary search over index bounds.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Result of a search. A miss is an ordinary outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchOutcome {
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            SearchOutcome::Found(index) => Some(*index),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Find `target` in a collection the caller keeps sorted ascending.
///
/// With duplicates, any index holding an equal element may be returned.
///
/// ```
/// use recursion_core::{find, SearchOutcome};
/// assert_eq!(find(&[1, 4, 9, 16], &9), SearchOutcome::Found(2));
/// assert_eq!(find(&[1, 4, 9, 16], &5), SearchOutcome::NotFound);
/// ```
pub fn find<T: Ord>(sorted: &[T], target: &T) -> SearchOutcome {
    find_by(sorted, |candidate| candidate.cmp(target))
}

/// Like [`find`], with `compare` telling how a candidate element orders
/// relative to the target.
pub fn find_by<T, F>(sorted: &[T], mut compare: F) -> SearchOutcome
where
    F: FnMut(&T) -> Ordering,
{
    let outcome = narrow(sorted, &mut compare, 0, sorted.len(), 0);
    debug!(len = sorted.len(), ?outcome, "binary search");
    outcome
}

/// Search the half-open range `low..high`. Only the bounds shrink; the slice
/// itself is never re-sliced or copied.
fn narrow<T, F>(
    sorted: &[T],
    compare: &mut F,
    low: usize,
    high: usize,
    depth: usize,
) -> SearchOutcome
where
    F: FnMut(&T) -> Ordering,
{
    if low >= high {
        return SearchOutcome::NotFound;
    }
    let mid = low + (high - low) / 2;
    trace!(low, high, mid, depth, "narrow");
    match compare(&sorted[mid]) {
        Ordering::Equal => SearchOutcome::Found(mid),
        Ordering::Greater => narrow(sorted, compare, low, mid, depth + 1),
        Ordering::Less => narrow(sorted, compare, mid + 1, high, depth + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_element_found() {
        let sorted = [1, 4, 5, 7, 11, 13, 23, 31, 40];
        for (i, value) in sorted.iter().enumerate() {
            assert_eq!(find(&sorted, value), SearchOutcome::Found(i));
        }
    }

    #[test]
    fn test_misses() {
        let sorted = [1, 4, 5, 7, 11];
        for missing in [0, 2, 6, 12] {
            assert_eq!(find(&sorted, &missing), SearchOutcome::NotFound);
        }
    }

    #[test]
    fn test_empty_collection() {
        let empty: [i32; 0] = [];
        let outcome = find(&empty, &3);
        assert!(!outcome.is_found());
        assert_eq!(outcome.index(), None);
    }

    #[test]
    fn test_find_by_key() {
        let words = ["ant", "bee", "cat", "dog"];
        let outcome = find_by(&words, |w| w.len().cmp(&3).then(w.cmp(&"cat")));
        assert_eq!(outcome.index(), Some(2));
    }

    #[test]
    fn test_outcome_json() {
        assert_eq!(
            serde_json::to_string(&SearchOutcome::Found(3)).unwrap(),
            r#"{"Found":3}"#
        );
        assert_eq!(
            serde_json::to_string(&SearchOutcome::NotFound).unwrap(),
            r#""NotFound""#
        );
    }
}
