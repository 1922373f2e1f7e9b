//! Tower of Hanoi move planning.
//!
//! [`HanoiPlanner`] turns a disk count and three peg labels into an ordered
//! [`MovePlan`]; [`PegBoard`] replays a plan and rejects any move that breaks
//! the stacking or adjacency rules.

mod board;
mod planner;
mod types;

pub use board::PegBoard;
pub use planner::{hanoi_plan, HanoiConfig, HanoiPlanner};
pub use types::{MotionPolicy, Move, MovePlan};
