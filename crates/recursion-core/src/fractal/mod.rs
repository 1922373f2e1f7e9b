//! Self-similar generation: Sierpinski subdivision and L-system rewriting.

mod lsystem;
mod sierpinski;

pub use lsystem::{
    l_system_expand, l_system_find, l_system_history, LSystem, LSystemConfig, Occurrence, RuleSet,
};
pub use sierpinski::{sierpinski, Point, Subdivision, Triangle, MAX_SIERPINSKI_ORDER};
