use crate::error::{RecursionError, Result};
use tracing::{debug, trace};

/// Last row whose entries all fit in `u128`. `C(132, 66)` does not.
pub const MAX_PASCAL_ROW: u64 = 131;

/// Row `n` of Pascal's triangle (row 0 is `[1]`).
///
/// Rows past [`MAX_PASCAL_ROW`] fail with [`RecursionError::Overflow`]
/// before any row is built.
pub fn pascal_row(n: i64) -> Result<Vec<u128>> {
    let n = validate_row(n)?;
    let row = row_at(n, 0)?;
    debug!(n, len = row.len(), "pascal row");
    Ok(row)
}

/// Rows `0..=n` of Pascal's triangle.
pub fn pascal_triangle(n: i64) -> Result<Vec<Vec<u128>>> {
    let n = validate_row(n)?;
    let rows = rows_through(n, 0)?;
    debug!(n, rows = rows.len(), "pascal triangle");
    Ok(rows)
}

fn validate_row(n: i64) -> Result<u64> {
    let n = u64::try_from(n).map_err(|_| RecursionError::InvalidIndex(n))?;
    if n > MAX_PASCAL_ROW {
        return Err(RecursionError::Overflow { index: n });
    }
    Ok(n)
}

fn row_at(n: u64, depth: usize) -> Result<Vec<u128>> {
    if n == 0 {
        return Ok(vec![1]);
    }
    trace!(n, depth, "pascal row");
    let previous = row_at(n - 1, depth + 1)?;
    next_row(&previous, n)
}

/// The accumulator comes back from the base case and grows by one row per
/// level, so each level sees every row below it.
fn rows_through(n: u64, depth: usize) -> Result<Vec<Vec<u128>>> {
    if n == 0 {
        return Ok(vec![vec![1]]);
    }
    trace!(n, depth, "pascal triangle");
    let mut rows = rows_through(n - 1, depth + 1)?;
    let next = match rows.last() {
        Some(previous) => next_row(previous, n)?,
        None => vec![1],
    };
    rows.push(next);
    Ok(rows)
}

/// `[1]`, the pairwise sums of `previous`, then `[1]`.
fn next_row(previous: &[u128], n: u64) -> Result<Vec<u128>> {
    let mut row = Vec::with_capacity(previous.len() + 1);
    row.push(1);
    for pair in previous.windows(2) {
        let sum = pair[0]
            .checked_add(pair[1])
            .ok_or(RecursionError::Overflow { index: n })?;
        row.push(sum);
    }
    row.push(1);
    Ok(row)
}
