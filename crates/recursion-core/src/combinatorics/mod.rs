//! Combinatorial generation: power sets, Pascal's triangle, selections.
//!
//! Every generator returns the whole collection it built, in a fixed order.

mod pascal;
mod power_set;
mod selection;

pub use pascal::{pascal_row, pascal_triangle, MAX_PASCAL_ROW};
pub use power_set::power_set;
pub use selection::{combinations, permutations};
