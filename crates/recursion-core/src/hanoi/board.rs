//! Three-peg simulator for checking a plan move by move.

use super::types::{MotionPolicy, Move, MovePlan};
use crate::error::{RecursionError, Result};
use tracing::debug;

/// Three stacks of disks, bottom first. Pegs stand in the row
/// `[source, temporary, destination]`.
#[derive(Debug, Clone)]
pub struct PegBoard<P> {
    pegs: [P; 3],
    stacks: [Vec<u32>; 3],
    policy: MotionPolicy,
    disks: u32,
}

impl<P: Copy + Eq + std::fmt::Debug> PegBoard<P> {
    /// Board with a tower of `disks` on `source` and the other pegs empty.
    pub fn new(disks: u32, source: P, destination: P, temporary: P, policy: MotionPolicy) -> Self {
        Self {
            pegs: [source, temporary, destination],
            stacks: [(1..=disks).rev().collect(), Vec::new(), Vec::new()],
            policy,
            disks,
        }
    }

    /// Disks on `peg`, bottom first. `None` for a peg not on this board.
    pub fn stack(&self, peg: P) -> Option<&[u32]> {
        self.position(peg).map(|i| self.stacks[i].as_slice())
    }

    /// True once every disk sits on `peg`.
    pub fn is_solved(&self, peg: P) -> bool {
        self.stack(peg)
            .is_some_and(|stack| stack.len() == self.disks as usize)
    }

    /// Apply one move, numbered `step` for error reports.
    pub fn apply(&mut self, step: usize, mv: &Move<P>) -> Result<()> {
        let illegal = |reason: String| RecursionError::IllegalMove { step, reason };

        let from = self
            .position(mv.from)
            .ok_or_else(|| illegal(format!("unknown peg {:?}", mv.from)))?;
        let to = self
            .position(mv.to)
            .ok_or_else(|| illegal(format!("unknown peg {:?}", mv.to)))?;
        if from == to {
            return Err(illegal(format!("disk {} stays on {:?}", mv.disk, mv.from)));
        }
        if self.policy == MotionPolicy::Adjacent && from.abs_diff(to) != 1 {
            return Err(illegal(format!(
                "{:?} and {:?} are not neighbours",
                mv.from, mv.to
            )));
        }

        match self.stacks[from].last() {
            Some(&top) if top == mv.disk => {}
            Some(&top) => {
                return Err(illegal(format!(
                    "disk {} is not on top of {:?} (disk {} is)",
                    mv.disk, mv.from, top
                )))
            }
            None => return Err(illegal(format!("{:?} is empty", mv.from))),
        }
        if let Some(&top) = self.stacks[to].last() {
            if top < mv.disk {
                return Err(illegal(format!(
                    "disk {} would cover smaller disk {} on {:?}",
                    mv.disk, top, mv.to
                )));
            }
        }

        self.stacks[from].pop();
        self.stacks[to].push(mv.disk);
        Ok(())
    }

    /// Apply every move of `plan` in order.
    pub fn replay(&mut self, plan: &MovePlan<P>) -> Result<()> {
        for (step, mv) in plan.iter().enumerate() {
            self.apply(step, mv)?;
        }
        Ok(())
    }

    /// Replay `plan` on a fresh board and check that it ends with the whole
    /// tower on `destination`.
    pub fn verify(plan: &MovePlan<P>, source: P, destination: P, temporary: P) -> Result<()> {
        let mut board = Self::new(plan.disks, source, destination, temporary, plan.policy);
        board.replay(plan)?;
        if !board.is_solved(destination) {
            return Err(RecursionError::IllegalMove {
                step: plan.len(),
                reason: format!("tower did not end on {:?}", destination),
            });
        }
        debug!(disks = plan.disks, moves = plan.len(), "plan verified");
        Ok(())
    }

    fn position(&self, peg: P) -> Option<usize> {
        self.pegs.iter().position(|&p| p == peg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hanoi::{hanoi_plan, HanoiConfig, HanoiPlanner};

    #[test]
    fn test_simple_plans_verify() {
        for n in 0..=10 {
            let plan = hanoi_plan(n, 'A', 'C', 'B', MotionPolicy::Simple).unwrap();
            assert_eq!(PegBoard::verify(&plan, 'A', 'C', 'B'), Ok(()));
        }
    }

    #[test]
    fn test_adjacent_plans_verify() {
        let planner = HanoiPlanner::with_config(HanoiConfig::adjacent());
        for n in 0..=6 {
            let plan = planner.plan(n, 'A', 'C', 'B').unwrap();
            assert_eq!(PegBoard::verify(&plan, 'A', 'C', 'B'), Ok(()));
        }
    }

    #[test]
    fn test_rejects_larger_on_smaller() {
        let mut board = PegBoard::new(2, 'A', 'C', 'B', MotionPolicy::Simple);
        board.apply(0, &Move::new(1, 'A', 'C')).unwrap();
        let err = board.apply(1, &Move::new(2, 'A', 'C')).unwrap_err();
        assert!(matches!(err, RecursionError::IllegalMove { step: 1, .. }));
        assert_eq!(board.stack('A'), Some(&[2][..]));
    }

    #[test]
    fn test_rejects_buried_disk() {
        let mut board = PegBoard::new(3, 'A', 'C', 'B', MotionPolicy::Simple);
        assert!(board.apply(0, &Move::new(2, 'A', 'B')).is_err());
        assert!(board.apply(0, &Move::new(1, 'B', 'C')).is_err());
    }

    #[test]
    fn test_rejects_jump_under_adjacent_policy() {
        let mut board = PegBoard::new(1, 'A', 'C', 'B', MotionPolicy::Adjacent);
        assert!(board.apply(0, &Move::new(1, 'A', 'C')).is_err());
        assert!(board.apply(0, &Move::new(1, 'A', 'B')).is_ok());
    }

    #[test]
    fn test_simple_plan_fails_adjacent_replay() {
        let plan = hanoi_plan(2, 'A', 'C', 'B', MotionPolicy::Simple).unwrap();
        let mut board = PegBoard::new(2, 'A', 'C', 'B', MotionPolicy::Adjacent);
        assert!(board.replay(&plan).is_err());
    }

    #[test]
    fn test_unfinished_plan_is_rejected() {
        let mut plan = hanoi_plan(3, 'A', 'C', 'B', MotionPolicy::Simple).unwrap();
        plan.moves.pop();
        assert!(PegBoard::verify(&plan, 'A', 'C', 'B').is_err());
    }
}
