use super::types::{MotionPolicy, Move, MovePlan};
use crate::error::{RecursionError, Result};
use tracing::{debug, trace};

/// Row position of each role when pegs stand in a line.
const SOURCE: usize = 0;
const TEMPORARY: usize = 1;
const DESTINATION: usize = 2;

/// Upper bound on moves reserved up front; larger plans grow as they go.
const PREALLOCATED_MOVES: u64 = 1 << 20;

/// Configuration for the planner
#[derive(Debug, Clone)]
pub struct HanoiConfig {
    /// Which moves are allowed
    pub policy: MotionPolicy,
    /// Largest tower the planner will expand
    pub max_disks: u32,
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self::simple()
    }
}

impl HanoiConfig {
    pub fn simple() -> Self {
        Self {
            policy: MotionPolicy::Simple,
            max_disks: 20,
        }
    }

    pub fn adjacent() -> Self {
        Self {
            policy: MotionPolicy::Adjacent,
            max_disks: 12, // 3^12 - 1 moves
        }
    }

    pub fn for_policy(policy: MotionPolicy) -> Self {
        match policy {
            MotionPolicy::Simple => Self::simple(),
            MotionPolicy::Adjacent => Self::adjacent(),
        }
    }
}

/// Tower of Hanoi planner. Holds only configuration; every plan is built
/// from scratch.
#[derive(Debug, Clone)]
pub struct HanoiPlanner {
    config: HanoiConfig,
}

impl Default for HanoiPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl HanoiPlanner {
    /// Create a planner for the simple policy.
    pub fn new() -> Self {
        Self {
            config: HanoiConfig::default(),
        }
    }

    pub fn with_config(config: HanoiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HanoiConfig {
        &self.config
    }

    /// Moves that transfer `n` disks from `source` to `destination`.
    ///
    /// ```
    /// use recursion_core::{HanoiPlanner, Move};
    /// let plan = HanoiPlanner::new().plan(2, 'A', 'C', 'B').unwrap();
    /// assert_eq!(
    ///     plan.moves,
    ///     vec![Move::new(1, 'A', 'B'), Move::new(2, 'A', 'C'), Move::new(1, 'B', 'C')]
    /// );
    /// ```
    pub fn plan<P: Copy + Eq>(
        &self,
        n: i64,
        source: P,
        destination: P,
        temporary: P,
    ) -> Result<MovePlan<P>> {
        let disks = self.validate(n, source, destination, temporary)?;
        let policy = self.config.policy;
        let mut moves = preallocate(policy, disks);

        match policy {
            MotionPolicy::Simple => {
                plan_simple(disks, source, destination, temporary, &mut moves, 0);
            }
            MotionPolicy::Adjacent => {
                let row = peg_row(source, destination, temporary);
                plan_adjacent(disks, SOURCE, DESTINATION, &row, &mut moves, 0);
            }
        }

        debug!(disks, %policy, moves = moves.len(), "hanoi plan");
        Ok(MovePlan {
            policy,
            disks,
            moves,
        })
    }

    /// Same plan as [`HanoiPlanner::plan`], driven by an explicit stack
    /// instead of the call stack.
    pub fn plan_iterative<P: Copy + Eq>(
        &self,
        n: i64,
        source: P,
        destination: P,
        temporary: P,
    ) -> Result<MovePlan<P>> {
        let disks = self.validate(n, source, destination, temporary)?;
        let policy = self.config.policy;
        let row = peg_row(source, destination, temporary);
        let mut moves = preallocate(policy, disks);

        let mut stack = vec![Frame::Tower {
            disks,
            from: SOURCE,
            to: DESTINATION,
        }];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Single { disk, from, to } => {
                    moves.push(Move::new(disk, row[from], row[to]));
                }
                Frame::Tower { disks: 0, .. } => {}
                Frame::Tower { disks, from, to } => {
                    let spare = 3 - from - to;
                    let rest = disks - 1;
                    // Pushed in reverse: the last frame pushed runs first.
                    if policy == MotionPolicy::Simple || from.abs_diff(to) == 1 {
                        stack.push(Frame::Tower { disks: rest, from: spare, to });
                        stack.push(Frame::Single { disk: disks, from, to });
                        stack.push(Frame::Tower { disks: rest, from, to: spare });
                    } else {
                        stack.push(Frame::Tower { disks: rest, from, to });
                        stack.push(Frame::Single { disk: disks, from: spare, to });
                        stack.push(Frame::Tower { disks: rest, from: to, to: from });
                        stack.push(Frame::Single { disk: disks, from, to: spare });
                        stack.push(Frame::Tower { disks: rest, from, to });
                    }
                }
            }
        }

        debug!(disks, %policy, moves = moves.len(), "hanoi plan (iterative)");
        Ok(MovePlan {
            policy,
            disks,
            moves,
        })
    }

    fn validate<P: Eq>(&self, n: i64, source: P, destination: P, temporary: P) -> Result<u32> {
        let disks = u32::try_from(n).map_err(|_| RecursionError::InvalidDiskCount(n))?;
        if disks > self.config.max_disks {
            return Err(RecursionError::LimitExceeded {
                what: "disk count",
                value: u64::from(disks),
                limit: u64::from(self.config.max_disks),
            });
        }
        if source == destination || source == temporary || destination == temporary {
            return Err(RecursionError::invalid_argument(
                "source, destination and temporary must be three different pegs",
            ));
        }
        Ok(disks)
    }
}

/// Plan with the default configuration for `policy`.
pub fn hanoi_plan<P: Copy + Eq>(
    n: i64,
    source: P,
    destination: P,
    temporary: P,
    policy: MotionPolicy,
) -> Result<MovePlan<P>> {
    HanoiPlanner::with_config(HanoiConfig::for_policy(policy))
        .plan(n, source, destination, temporary)
}

fn preallocate<P>(policy: MotionPolicy, disks: u32) -> Vec<Move<P>> {
    Vec::with_capacity(policy.move_count(disks).min(PREALLOCATED_MOVES) as usize)
}

fn peg_row<P: Copy>(source: P, destination: P, temporary: P) -> [P; 3] {
    let mut row = [source; 3];
    row[TEMPORARY] = temporary;
    row[DESTINATION] = destination;
    row
}

enum Frame {
    Tower { disks: u32, from: usize, to: usize },
    Single { disk: u32, from: usize, to: usize },
}

/// Roles rotate between the two sub-plans: the first parks `n - 1` disks on
/// `temporary`, the second brings them from there onto `destination`.
fn plan_simple<P: Copy>(
    n: u32,
    source: P,
    destination: P,
    temporary: P,
    moves: &mut Vec<Move<P>>,
    depth: usize,
) {
    if n == 0 {
        return;
    }
    trace!(n, depth, "plan simple");
    plan_simple(n - 1, source, temporary, destination, moves, depth + 1);
    moves.push(Move::new(n, source, destination));
    plan_simple(n - 1, temporary, destination, source, moves, depth + 1);
}

/// `from` and `to` are row positions. Between neighbours the smaller disks
/// get out of the way on the far peg; between the two ends the largest disk
/// stops on the middle peg while the smaller ones shuttle back and forth.
fn plan_adjacent<P: Copy>(
    n: u32,
    from: usize,
    to: usize,
    row: &[P; 3],
    moves: &mut Vec<Move<P>>,
    depth: usize,
) {
    if n == 0 {
        return;
    }
    trace!(n, from, to, depth, "plan adjacent");
    let spare = 3 - from - to;
    if from.abs_diff(to) == 1 {
        plan_adjacent(n - 1, from, spare, row, moves, depth + 1);
        moves.push(Move::new(n, row[from], row[to]));
        plan_adjacent(n - 1, spare, to, row, moves, depth + 1);
    } else {
        plan_adjacent(n - 1, from, to, row, moves, depth + 1);
        moves.push(Move::new(n, row[from], row[spare]));
        plan_adjacent(n - 1, to, from, row, moves, depth + 1);
        moves.push(Move::new(n, row[spare], row[to]));
        plan_adjacent(n - 1, from, to, row, moves, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_disks() {
        let plan = hanoi_plan(2, 'A', 'C', 'B', MotionPolicy::Simple).unwrap();
        assert_eq!(
            plan.moves,
            vec![Move::new(1, 'A', 'B'), Move::new(2, 'A', 'C'), Move::new(1, 'B', 'C')]
        );
    }

    #[test]
    fn test_zero_disks_emit_nothing() {
        let plan = HanoiPlanner::new().plan(0, 'A', 'C', 'B').unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.largest_disk_index(), None);
    }

    #[test]
    fn test_simple_counts_and_midpoint() {
        let planner = HanoiPlanner::new();
        for n in 1..=12u32 {
            let plan = planner.plan(i64::from(n), 'A', 'C', 'B').unwrap();
            let expected = (1usize << n) - 1;
            assert_eq!(plan.len(), expected);
            assert_eq!(plan.largest_disk_index(), Some(expected / 2));
            assert_eq!(plan.moves[expected / 2], Move::new(n, 'A', 'C'));
        }
    }

    /// Disk `n` moves exactly in the middle of the window that transfers
    /// `n` disks, and each half transfers `n - 1` disks with roles rotated.
    fn check_window(moves: &[Move<char>], n: u32, from: char, to: char, via: char) {
        assert_eq!(moves.len(), (1usize << n) - 1);
        if n == 0 {
            return;
        }
        let mid = moves.len() / 2;
        assert_eq!(moves[mid], Move::new(n, from, to));
        check_window(&moves[..mid], n - 1, from, via, to);
        check_window(&moves[mid + 1..], n - 1, via, to, from);
    }

    #[test]
    fn test_midpoint_holds_at_every_level() {
        let planner = HanoiPlanner::new();
        for n in 0..=10u32 {
            let plan = planner.plan(i64::from(n), 'A', 'C', 'B').unwrap();
            check_window(&plan.moves, n, 'A', 'C', 'B');
            let iterative = planner.plan_iterative(i64::from(n), 'A', 'C', 'B').unwrap();
            check_window(&iterative.moves, n, 'A', 'C', 'B');
        }
    }

    #[test]
    fn test_adjacent_never_jumps() {
        let planner = HanoiPlanner::with_config(HanoiConfig::adjacent());
        let plan = planner.plan(3, 'L', 'R', 'M').unwrap();
        assert_eq!(plan.len() as u64, MotionPolicy::Adjacent.move_count(3));
        for m in &plan {
            let ends = [m.from, m.to];
            assert!(ends.contains(&'M'), "{:?} skips the middle peg", m);
        }
    }

    #[test]
    fn test_adjacent_one_disk() {
        let plan = hanoi_plan(1, 'A', 'C', 'B', MotionPolicy::Adjacent).unwrap();
        assert_eq!(plan.moves, vec![Move::new(1, 'A', 'B'), Move::new(1, 'B', 'C')]);
    }

    #[test]
    fn test_iterative_matches_recursive() {
        for config in [HanoiConfig::simple(), HanoiConfig::adjacent()] {
            let planner = HanoiPlanner::with_config(config);
            for n in 0..=6 {
                assert_eq!(
                    planner.plan(n, 1u8, 3, 2).unwrap(),
                    planner.plan_iterative(n, 1u8, 3, 2).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_invalid_disk_count() {
        assert_eq!(
            HanoiPlanner::new().plan(-1, 'A', 'C', 'B'),
            Err(RecursionError::InvalidDiskCount(-1))
        );
        assert!(matches!(
            HanoiPlanner::new().plan(21, 'A', 'C', 'B'),
            Err(RecursionError::LimitExceeded { .. })
        ));
    }

    #[test]
    fn test_pegs_must_differ() {
        let err = HanoiPlanner::new().plan(3, 'A', 'A', 'B').unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
