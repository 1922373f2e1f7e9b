//! Recursive computation core.
//!
//! Five families of deterministic recursive algorithms that return plain data
//! for a rendering or reporting layer to consume:
//!
//! - [`memo`]: memoizing evaluator for recurrences such as Fibonacci
//! - [`divide`]: binary search and stable merge sort over index bounds
//! - [`combinatorics`]: power sets, Pascal's triangle, combinations, permutations
//! - [`hanoi`]: Tower of Hanoi move planning under two motion policies
//! - [`fractal`]: Sierpinski subdivision and L-system rewriting

pub mod combinatorics;
pub mod divide;
pub mod error;
pub mod fractal;
pub mod hanoi;
pub mod memo;

pub use combinatorics::{combinations, pascal_row, pascal_triangle, permutations, power_set};
pub use divide::{
    find, find_by, merge_sort, merge_sort_by, merge_sort_in_place, merge_sort_with_stats,
    SearchOutcome, SortStats,
};
pub use error::{RecursionError, Result};
pub use fractal::{
    l_system_expand, l_system_find, l_system_history, sierpinski, LSystem, LSystemConfig,
    Occurrence, Point, RuleSet, Subdivision, Triangle,
};
pub use hanoi::{
    hanoi_plan, HanoiConfig, HanoiPlanner, MotionPolicy, Move, MovePlan, PegBoard,
};
pub use memo::{
    evaluate_naive, memoize, memoize_sequence, FactorialRule, LinearRule, MemoTable, Recurrence,
    Rule,
};
