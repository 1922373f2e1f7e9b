//! k-combinations and permutations.

use tracing::debug;

/// Every `k`-element selection of `items`, keeping input order inside each
/// selection. Selections containing the first element come first.
///
/// `k == 0` gives one empty selection; `k > items.len()` gives none.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let selections = choose(items, k);
    debug!(len = items.len(), k, selections = selections.len(), "combinations");
    selections
}

fn choose<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    let Some((head, rest)) = items.split_first() else {
        return Vec::new();
    };
    if items.len() < k {
        return Vec::new();
    }

    let mut selections: Vec<Vec<T>> = choose(rest, k - 1)
        .into_iter()
        .map(|tail| {
            let mut selection = Vec::with_capacity(k);
            selection.push(head.clone());
            selection.extend(tail);
            selection
        })
        .collect();
    selections.extend(choose(rest, k));
    selections
}

/// Every ordering of `items`, `len!` in total, in order of the position
/// picked first.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let orderings = arrange(items);
    debug!(len = items.len(), orderings = orderings.len(), "permutations");
    orderings
}

fn arrange<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }
    let mut orderings = Vec::new();
    for (i, head) in items.iter().enumerate() {
        let rest: Vec<T> = items[..i].iter().chain(&items[i + 1..]).cloned().collect();
        for tail in arrange(&rest) {
            let mut ordering = Vec::with_capacity(items.len());
            ordering.push(head.clone());
            ordering.extend(tail);
            orderings.push(ordering);
        }
    }
    orderings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations_of_abcd() {
        let picks = combinations(&['a', 'b', 'c', 'd'], 2);
        assert_eq!(
            picks,
            vec![
                vec!['a', 'b'],
                vec!['a', 'c'],
                vec!['a', 'd'],
                vec!['b', 'c'],
                vec!['b', 'd'],
                vec!['c', 'd'],
            ]
        );
    }

    #[test]
    fn test_combination_edges() {
        assert_eq!(combinations(&[1, 2, 3], 0), vec![Vec::<i32>::new()]);
        assert!(combinations(&[1, 2, 3], 4).is_empty());
        assert_eq!(combinations(&[1, 2, 3], 3), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_combination_counts_match_pascal() {
        let items: Vec<u8> = (0..8).collect();
        let row = crate::pascal_row(8).unwrap();
        for (k, &expected) in row.iter().enumerate() {
            assert_eq!(combinations(&items, k).len() as u128, expected);
        }
    }

    #[test]
    fn test_permutations() {
        assert_eq!(
            permutations(&[1, 2, 3]),
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
        assert_eq!(permutations::<u8>(&[]), vec![Vec::<u8>::new()]);
        assert_eq!(permutations(&[0, 1, 2, 3, 4]).len(), 120);
    }
}
