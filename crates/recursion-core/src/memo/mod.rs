//! Memoizing evaluator for recurrences.
//!
//! [`memoize`] looks an index up in the memo table before descending, so a
//! recurrence with branching factor two (Fibonacci) still costs one
//! computation per index. The table is caller-visible state: pass one in to
//! keep values between calls, or pass `None` for a throwaway table.

mod rule;
mod table;

use crate::error::{RecursionError, Result};
use std::collections::BTreeSet;
use tracing::{debug, trace};

pub use rule::{FactorialRule, LinearRule, Recurrence, Rule};
pub use table::MemoTable;

/// Most indices a single evaluation may need to compute. The descent runs on
/// an explicit stack, so this bounds work and memory, not call depth.
pub const MAX_RECURSION_DEPTH: u64 = 10_000;

/// Compute `f(n)` for the recurrence, reusing and filling `table`.
pub fn memoize<R: Rule>(
    n: i64,
    recurrence: &Recurrence<R>,
    table: Option<&mut MemoTable>,
) -> Result<u128> {
    let n = validate_index(n)?;
    let mut scratch = MemoTable::new();
    let table = match table {
        Some(table) => table,
        None => &mut scratch,
    };

    check_reachable(n, recurrence, table)?;
    let value = descend(n, recurrence, Some(&mut *table))?;
    debug!(
        n,
        value = %value,
        computed = table.computed(),
        hits = table.hits(),
        "memoized recurrence"
    );
    Ok(value)
}

/// Compute the full history `f(0)..=f(n)`.
///
/// Indices are visited in ascending order, so every descent after the first
/// few stops at the table one level down.
pub fn memoize_sequence<R: Rule>(
    n: i64,
    recurrence: &Recurrence<R>,
    table: Option<&mut MemoTable>,
) -> Result<Vec<u128>> {
    let n = validate_index(n)?;
    let mut scratch = MemoTable::new();
    let table = match table {
        Some(table) => table,
        None => &mut scratch,
    };

    let mut sequence = Vec::new();
    for i in 0..=n {
        check_reachable(i, recurrence, table)?;
        sequence.push(descend(i, recurrence, Some(&mut *table))?);
    }
    debug!(n, computed = table.computed(), "memoized sequence");
    Ok(sequence)
}

/// The plain recurrence with no table. Exponential for branching rules; use it
/// to cross-check [`memoize`] on small indices.
pub fn evaluate_naive<R: Rule>(n: i64, recurrence: &Recurrence<R>) -> Result<u128> {
    let n = validate_index(n)?;
    check_reachable(n, recurrence, &MemoTable::new())?;
    descend(n, recurrence, None)
}

fn validate_index(n: i64) -> Result<u64> {
    u64::try_from(n).map_err(|_| RecursionError::InvalidIndex(n))
}

/// Walk every index the descent from `n` could visit without recursing, and
/// reject the recurrence if one of them would need a negative index.
fn check_reachable<R: Rule>(n: u64, recurrence: &Recurrence<R>, table: &MemoTable) -> Result<()> {
    let offsets = recurrence.rule().offsets();
    if offsets.is_empty() {
        return Err(RecursionError::malformed(
            "rule does not reference any smaller index",
        ));
    }
    if offsets.contains(&0) {
        return Err(RecursionError::malformed(
            "offset 0 makes f(n) depend on itself",
        ));
    }

    let mut pending = vec![n];
    let mut unresolved = BTreeSet::new();
    while let Some(i) = pending.pop() {
        if table.contains(i) || recurrence.is_base(i) || !unresolved.insert(i) {
            continue;
        }
        if unresolved.len() as u64 > MAX_RECURSION_DEPTH {
            return Err(RecursionError::LimitExceeded {
                what: "recursion depth",
                value: n,
                limit: MAX_RECURSION_DEPTH,
            });
        }
        for &k in offsets {
            match i.checked_sub(k) {
                Some(j) => pending.push(j),
                None => {
                    return Err(RecursionError::malformed(format!(
                        "f({i}) needs f({i} - {k}) but index {i} has no base value"
                    )))
                }
            }
        }
    }
    Ok(())
}

/// One step of the descent. `Visit` resolves an index or schedules its
/// terms; `Combine` folds the terms that the visits left on the value stack.
enum Frame {
    Visit { index: u64, depth: usize },
    Combine { index: u64 },
}

/// Depth-first evaluation of `f(n)` on an explicit stack, so the input size
/// bounds heap use rather than call-stack depth. Terms are visited in offset
/// order and each one is finished before the next starts, which lets a later
/// term hit the table entries an earlier one filled. With no table every
/// index is recomputed.
fn descend<R: Rule>(
    n: u64,
    recurrence: &Recurrence<R>,
    mut table: Option<&mut MemoTable>,
) -> Result<u128> {
    let rule = recurrence.rule();
    let arity = rule.offsets().len();
    let mut frames = vec![Frame::Visit { index: n, depth: 0 }];
    let mut values: Vec<u128> = Vec::new();

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Visit { index, depth } => {
                if let Some(value) = table.as_deref_mut().and_then(|t| t.lookup(index)) {
                    values.push(value);
                    continue;
                }
                if let Some(value) = recurrence.base_value(index) {
                    values.push(match table.as_deref_mut() {
                        Some(table) => table.insert(index, value),
                        None => value,
                    });
                    continue;
                }
                trace!(n = index, depth, "descend");
                frames.push(Frame::Combine { index });
                // Reversed so the first offset is popped first.
                for &k in rule.offsets().iter().rev() {
                    frames.push(Frame::Visit {
                        index: index - k,
                        depth: depth + 1,
                    });
                }
            }
            Frame::Combine { index } => {
                let terms = values.split_off(values.len().saturating_sub(arity));
                let value = rule
                    .combine(index, &terms)
                    .ok_or(RecursionError::Overflow { index })?;
                values.push(match table.as_deref_mut() {
                    Some(table) => table.record(index, value),
                    None => value,
                });
            }
        }
    }
    values
        .pop()
        .ok_or_else(|| RecursionError::malformed("evaluation produced no value"))
}
