use serde::{Deserialize, Serialize};

/// Which peg-to-peg moves are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MotionPolicy {
    /// Any peg to any other peg.
    #[default]
    Simple,
    /// Pegs stand in a row `[source, temporary, destination]`; a disk may
    /// only move to a neighbouring peg.
    Adjacent,
}

impl MotionPolicy {
    /// Number of moves in a full transfer of `disks` disks from source to
    /// destination: `2^n - 1` for simple moves, `3^n - 1` when every disk has
    /// to pass through the middle peg. Saturates at `u64::MAX - 1`.
    pub fn move_count(&self, disks: u32) -> u64 {
        match self {
            MotionPolicy::Simple => 2u64.saturating_pow(disks) - 1,
            MotionPolicy::Adjacent => 3u64.saturating_pow(disks) - 1,
        }
    }
}

impl std::fmt::Display for MotionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotionPolicy::Simple => write!(f, "Simple"),
            MotionPolicy::Adjacent => write!(f, "Adjacent"),
        }
    }
}

/// One move: disk `disk` (1 = smallest) goes from peg `from` to peg `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move<P> {
    pub disk: u32,
    pub from: P,
    pub to: P,
}

impl<P> Move<P> {
    pub fn new(disk: u32, from: P, to: P) -> Self {
        Self { disk, from, to }
    }
}

impl<P: std::fmt::Display> std::fmt::Display for Move<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "disk {}: {} -> {}", self.disk, self.from, self.to)
    }
}

/// Ordered moves transferring a tower, plus how they were planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlan<P> {
    /// Policy the moves obey
    pub policy: MotionPolicy,
    /// Number of disks in the tower
    pub disks: u32,
    /// Moves in execution order
    pub moves: Vec<Move<P>>,
}

impl<P> MovePlan<P> {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move<P>> {
        self.moves.iter()
    }

    /// Position of the first move of the largest disk.
    pub fn largest_disk_index(&self) -> Option<usize> {
        self.moves.iter().position(|m| m.disk == self.disks)
    }
}

impl<P> IntoIterator for MovePlan<P> {
    type Item = Move<P>;
    type IntoIter = std::vec::IntoIter<Move<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a MovePlan<P> {
    type Item = &'a Move<P>;
    type IntoIter = std::slice::Iter<'a, Move<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
