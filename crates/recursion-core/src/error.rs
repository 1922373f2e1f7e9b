//! Error taxonomy shared by every component.
//!
//! Input problems are reported before any recursion starts. A search miss is
//! not an error: it comes back as [`crate::SearchOutcome::NotFound`] or `None`.

/// Failure of a recursive computation. Every failure is deterministic for a
/// given input, so nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecursionError {
    /// A sequence index was negative.
    #[error("invalid index {0}: must be non-negative")]
    InvalidIndex(i64),

    /// A subdivision order was negative.
    #[error("invalid order {0}: must be non-negative")]
    InvalidOrder(i64),

    /// A Hanoi disk count was negative.
    #[error("invalid disk count {0}: must be non-negative")]
    InvalidDiskCount(i64),

    /// Any other rejected argument (empty axiom, duplicated peg, ...).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The recurrence can reach an index with no base value.
    #[error("malformed recurrence: {reason}")]
    MalformedRecurrence { reason: String },

    /// A computed value does not fit the value type.
    #[error("value at index {index} overflows u128")]
    Overflow { index: u64 },

    /// The input is valid but larger than this crate is willing to expand.
    #[error("{what} {value} exceeds limit {limit}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        limit: u64,
    },

    /// A move plan broke the stacking or adjacency rules during replay.
    #[error("illegal move at step {step}: {reason}")]
    IllegalMove { step: usize, reason: String },
}

impl RecursionError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecurrence {
            reason: reason.into(),
        }
    }

    /// True for the invalid-argument family: negative index, order or disk
    /// count, and other rejected arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidIndex(_)
                | Self::InvalidOrder(_)
                | Self::InvalidDiskCount(_)
                | Self::InvalidArgument { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RecursionError>;
