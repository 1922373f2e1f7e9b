//! Caller-owned memo table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Index → value cache shared across evaluations of one recurrence.
///
/// A stored value is never replaced. Reusing a table with a different
/// recurrence gives that recurrence the wrong answers, so keep one table per
/// recurrence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoTable {
    values: BTreeMap<u64, u128>,
    #[serde(skip)]
    hits: u64,
    #[serde(skip)]
    computed: u64,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated table, e.g. to supply base values without a recurrence.
    pub fn with_values(values: impl IntoIterator<Item = (u64, u128)>) -> Self {
        Self {
            values: values.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn get(&self, n: u64) -> Option<u128> {
        self.values.get(&n).copied()
    }

    pub fn contains(&self, n: u64) -> bool {
        self.values.contains_key(&n)
    }

    /// Store `value` under `n` unless `n` is already present. Returns the
    /// value that ends up stored.
    pub fn insert(&mut self, n: u64, value: u128) -> u128 {
        *self.values.entry(n).or_insert(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lookups answered from the table since it was created.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Values produced by a rule (not base values) since it was created.
    pub fn computed(&self) -> u64 {
        self.computed
    }

    /// Stored `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u128)> + '_ {
        self.values.iter().map(|(&n, &v)| (n, v))
    }

    pub(crate) fn lookup(&mut self, n: u64) -> Option<u128> {
        let found = self.get(n);
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    pub(crate) fn record(&mut self, n: u64, value: u128) -> u128 {
        self.computed += 1;
        self.insert(n, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let mut table = MemoTable::new();
        assert_eq!(table.insert(3, 2), 2);
        assert_eq!(table.insert(3, 99), 2);
        assert_eq!(table.get(3), Some(2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_counters() {
        let mut table = MemoTable::with_values([(0, 0), (1, 1)]);
        assert_eq!(table.lookup(1), Some(1));
        assert_eq!(table.lookup(2), None);
        table.record(2, 1);
        assert_eq!(table.hits(), 1);
        assert_eq!(table.computed(), 1);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_json_drops_counters() {
        let mut table = MemoTable::with_values([(0, 0), (1, 1)]);
        table.lookup(0);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"values":{"0":0,"1":1}}"#);

        let restored: MemoTable = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.get(1), Some(1));
        assert_eq!(restored.hits(), 0);
    }
}
