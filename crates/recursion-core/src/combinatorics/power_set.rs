use tracing::{debug, trace};

/// Every subset of `items`, `2^len` in total.
///
/// The empty subset comes first; after that the subsets containing each
/// later element follow the ones without it. Equal values at different
/// positions count as different elements.
///
/// ```
/// use recursion_core::power_set;
/// let subsets = power_set(&['a', 'b']);
/// assert_eq!(subsets, vec![vec![], vec!['a'], vec!['b'], vec!['a', 'b']]);
/// ```
pub fn power_set<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let subsets = subsets_of(items, 0);
    debug!(len = items.len(), subsets = subsets.len(), "power set");
    subsets
}

fn subsets_of<T: Clone>(items: &[T], depth: usize) -> Vec<Vec<T>> {
    let Some((last, rest)) = items.split_last() else {
        return vec![Vec::new()];
    };
    trace!(remaining = rest.len(), depth, "power set");

    let mut subsets = subsets_of(rest, depth + 1);
    let with_last: Vec<Vec<T>> = subsets
        .iter()
        .map(|subset| {
            let mut extended = subset.clone();
            extended.push(last.clone());
            extended
        })
        .collect();
    subsets.extend(with_last);
    subsets
}
